use crate::{APIResponse, BaseClient};
use std::sync::Arc;
use wf_review_api_structs::*;

#[derive(Clone)]
pub struct StatusClient {
    base: Arc<BaseClient>,
}

impl StatusClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn check_health(&self) -> APIResponse<get_status::APIResponse> {
        self.base.get("").await
    }
}
