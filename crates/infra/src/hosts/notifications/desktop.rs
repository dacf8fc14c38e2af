use super::{INotificationCenter, NotificationOptions};
use crate::hosts::HostEventSender;
use notify_rust::{Notification, Timeout};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

const APP_NAME: &str = "wf_review";
/// Action the notification server reports when the body is clicked
const DEFAULT_ACTION: &str = "default";
/// Ids beyond this are forgotten oldest first. Only freedesktop reports
/// closed notifications, elsewhere ids would pile up forever.
const MAX_ACTIVE_NOTIFICATIONS: usize = 16;

/// Ids of notifications that may still be on screen
#[derive(Debug, Default)]
struct ActiveNotifications {
    ids: VecDeque<String>,
}

impl ActiveNotifications {
    fn insert(&mut self, id: String) {
        self.ids.push_back(id);
        while self.ids.len() > MAX_ACTIVE_NOTIFICATIONS {
            self.ids.pop_front();
        }
    }

    fn remove(&mut self, id: &str) -> bool {
        match self.ids.iter().position(|active| active == id) {
            Some(index) => self.ids.remove(index).is_some(),
            None => false,
        }
    }
}

/// Native desktop notifications.
///
/// Click and close events are only reported on freedesktop platforms,
/// elsewhere the notification is shown without feedback.
pub struct DesktopNotificationCenter {
    next_id: AtomicU64,
    active: Arc<Mutex<ActiveNotifications>>,
    events: HostEventSender,
}

impl DesktopNotificationCenter {
    pub fn new(events: HostEventSender) -> Self {
        Self {
            next_id: AtomicU64::new(1),
            active: Arc::new(Mutex::new(ActiveNotifications::default())),
            events,
        }
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn show(
    notification: Notification,
    id: String,
    active: Arc<Mutex<ActiveNotifications>>,
    events: HostEventSender,
) -> anyhow::Result<()> {
    use crate::hosts::HostEvent;

    let handle = notification.show()?;
    // Waiting for the action blocks, so it gets its own thread
    std::thread::spawn(move || {
        handle.wait_for_action(|action| {
            let event = if action == DEFAULT_ACTION {
                HostEvent::NotificationClicked(id.clone())
            } else {
                HostEvent::NotificationClosed(id.clone())
            };
            if events.send(event).is_err() {
                tracing::warn!("Host event loop is gone, dropping notification event for {}", id);
            }
        });
        active.lock().unwrap().remove(&id);
    });
    Ok(())
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn show(
    notification: Notification,
    _id: String,
    _active: Arc<Mutex<ActiveNotifications>>,
    _events: HostEventSender,
) -> anyhow::Result<()> {
    notification.show().map(|_| ())?;
    Ok(())
}

#[async_trait::async_trait]
impl INotificationCenter for DesktopNotificationCenter {
    async fn create(&self, options: NotificationOptions) -> anyhow::Result<String> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();

        let mut notification = Notification::new();
        notification
            .appname(APP_NAME)
            .summary(&options.title)
            .body(&options.message)
            .icon(&options.icon_url)
            .action(DEFAULT_ACTION, "Open");
        if options.require_interaction {
            notification.timeout(Timeout::Never);
        }

        self.active.lock().unwrap().insert(id.clone());
        let active = self.active.clone();
        let events = self.events.clone();
        let notification_id = id.clone();
        tokio::task::spawn_blocking(move || show(notification, notification_id, active, events))
            .await??;
        Ok(id)
    }

    async fn clear(&self, id: &str) -> anyhow::Result<bool> {
        // The server closes clicked notifications itself, only the
        // bookkeeping is left to do here
        let removed = self.active.lock().unwrap().remove(id);
        debug!("Cleared notification {}: {}", id, removed);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_forgets_the_oldest_ids_once_full() {
        let mut active = ActiveNotifications::default();
        for id in 0..MAX_ACTIVE_NOTIFICATIONS + 4 {
            active.insert(id.to_string());
        }
        assert_eq!(active.ids.len(), MAX_ACTIVE_NOTIFICATIONS);
        assert!(!active.remove("0"));
        assert!(!active.remove("3"));
        assert!(active.remove("4"));
        assert!(!active.remove("4"));
        assert_eq!(active.ids.len(), MAX_ACTIVE_NOTIFICATIONS - 1);
    }
}
