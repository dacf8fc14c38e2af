use crate::{APIResponse, BaseClient};
use serde_json::Value;
use std::sync::Arc;
use wf_review_api_structs::*;

#[derive(Clone)]
pub struct DiagnosticsClient {
    base: Arc<BaseClient>,
}

impl DiagnosticsClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn send_test(&self) -> APIResponse<send_test::APIResponse> {
        self.base.message(send_test::ACTION, Value::Null).await
    }

    pub async fn send_lark_msg(&self, text: &str) -> APIResponse<send_lark_msg::APIResponse> {
        self.base.message(send_lark_msg::ACTION, text).await
    }
}
