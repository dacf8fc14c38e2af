use crate::{APIResponse, BaseClient};
use serde_json::Value;
use std::sync::Arc;
use wf_review_api_structs::dtos::PreferencesInput;
use wf_review_api_structs::*;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_review_url(
        &self,
        input: &PreferencesInput,
    ) -> APIResponse<get_review_url::APIResponse> {
        self.base.message(get_review_url::ACTION, input).await
    }

    /// Arms the reminder with `input`, replacing the active one
    pub async fn set(&self, input: &PreferencesInput) -> APIResponse<set_reminder::APIResponse> {
        self.base.message(set_reminder::ACTION, input).await
    }

    pub async fn get_all_alarms(&self) -> APIResponse<get_all_alarms::APIResponse> {
        self.base.message(get_all_alarms::ACTION, Value::Null).await
    }
}
