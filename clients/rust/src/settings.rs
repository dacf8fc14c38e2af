use crate::{APIResponse, BaseClient};
use serde_json::Value;
use std::sync::Arc;
use wf_review_api_structs::dtos::PreferencesInput;
use wf_review_api_structs::*;

#[derive(Clone)]
pub struct SettingsClient {
    base: Arc<BaseClient>,
}

impl SettingsClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_stored(&self) -> APIResponse<get_stored_data::APIResponse> {
        self.base.message(get_stored_data::ACTION, Value::Null).await
    }

    pub async fn get_defaults(&self) -> APIResponse<get_default_data::APIResponse> {
        self.base.message(get_default_data::ACTION, Value::Null).await
    }

    pub async fn get_default_preferences(&self) -> APIResponse<trans_to_user_data::APIResponse> {
        self.base
            .message(trans_to_user_data::ACTION, Value::Null)
            .await
    }

    /// `input` with the stored settings laid over it
    pub async fn build_storage_data(
        &self,
        input: &PreferencesInput,
    ) -> APIResponse<build_user_storage_data::APIResponse> {
        self.base
            .message(build_user_storage_data::ACTION, input)
            .await
    }
}
