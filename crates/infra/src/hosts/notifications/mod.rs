mod desktop;
mod inmemory;

pub use desktop::DesktopNotificationCenter;
pub use inmemory::InMemoryNotificationCenter;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationOptions {
    pub title: String,
    pub message: String,
    pub icon_url: String,
    /// Keep the notification on screen until the user acts on it
    pub require_interaction: bool,
}

/// The host notification center. Clicks and dismissals are delivered as
/// `HostEvent::NotificationClicked` and `HostEvent::NotificationClosed`.
#[async_trait::async_trait]
pub trait INotificationCenter: Send + Sync {
    /// Shows a notification and returns its id
    async fn create(&self, options: NotificationOptions) -> anyhow::Result<String>;
    /// Returns `false` if no notification with that id was showing
    async fn clear(&self, id: &str) -> anyhow::Result<bool>;
}
