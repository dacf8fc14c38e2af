mod base;
mod diagnostics;
mod reminder;
mod settings;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use diagnostics::DiagnosticsClient;
use reminder::ReminderClient;
use settings::SettingsClient;
use status::StatusClient;
use std::sync::Arc;

pub use wf_review_api_structs::dtos::*;
pub use wf_review_api_structs::MessageRequest;
pub use wf_review_domain::GenerationMode;

/// Review reminder SDK
///
/// Typed access to every action of the review reminder message api.
#[derive(Clone)]
pub struct ReviewSDK {
    base: Arc<BaseClient>,
    pub reminder: ReminderClient,
    pub settings: SettingsClient,
    pub diagnostics: DiagnosticsClient,
    pub status: StatusClient,
}

impl ReviewSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let reminder = ReminderClient::new(base.clone());
        let settings = SettingsClient::new(base.clone());
        let diagnostics = DiagnosticsClient::new(base.clone());
        let status = StatusClient::new(base.clone());

        Self {
            base,
            reminder,
            settings,
            diagnostics,
            status,
        }
    }

    /// Sends a message as is and returns the raw JSON answer
    pub async fn send_raw(&self, request: &serde_json::Value) -> APIResponse<serde_json::Value> {
        self.base.post(request, "message").await
    }
}
