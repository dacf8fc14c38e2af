use crate::error::ReviewError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::HttpResponse;
use wf_review_api_structs::send_lark_msg::*;
use wf_review_infra::ReviewContext;

pub async fn send_lark_msg_controller(
    body: RequestBody,
    ctx: &ReviewContext,
) -> Result<HttpResponse, ReviewError> {
    execute(SendLarkMsgUseCase { text: body }, ctx)
        .await
        .map(|result| HttpResponse::Ok().json(APIResponse { result }))
        .map_err(ReviewError::from)
}

/// Posts a text message to the configured chat webhook
#[derive(Debug)]
pub struct SendLarkMsgUseCase {
    pub text: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    NetworkFailure(anyhow::Error),
}

impl From<UseCaseError> for ReviewError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NetworkFailure(e) => Self::NetworkFailure(e.to_string()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendLarkMsgUseCase {
    type Response = serde_json::Value;
    type Error = UseCaseError;

    const NAME: &'static str = "SendLarkMsg";

    async fn execute(&mut self, ctx: &ReviewContext) -> Result<Self::Response, Self::Error> {
        ctx.hosts
            .outbound
            .post_text_message(&self.text)
            .await
            .map_err(UseCaseError::NetworkFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_review_infra::{Config, LarkTextMessage};

    #[actix_web::main]
    #[test]
    async fn it_posts_text_messages() {
        let (ctx, hosts, _events) = ReviewContext::create_inmemory(Config::inmemory());
        execute(SendLarkMsgUseCase { text: "hello".into() }, &ctx)
            .await
            .unwrap();
        assert_eq!(hosts.outbound.posted(), vec![LarkTextMessage::text("hello")]);

        hosts.outbound.set_offline(true);
        let res = execute(SendLarkMsgUseCase { text: "again".into() }, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::NetworkFailure(_))));
    }
}
