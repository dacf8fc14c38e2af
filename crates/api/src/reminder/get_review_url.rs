use crate::error::ReviewError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::HttpResponse;
use wf_review_api_structs::get_review_url::*;
use wf_review_domain::{generate_review_url, DefaultSettings, UserPreferences, WindowOutOfRange};
use wf_review_infra::ReviewContext;

pub async fn get_review_url_controller(
    body: RequestBody,
    ctx: &ReviewContext,
) -> Result<HttpResponse, ReviewError> {
    let defaults = DefaultSettings::default();
    // The interval plays no part in the url
    let interval = body.interval().unwrap_or(defaults.default_interval);
    let usecase = GetReviewUrlUseCase {
        preferences: body.into_preferences(interval),
    };

    execute(usecase, ctx)
        .await
        .map(|url| HttpResponse::Ok().json(APIResponse { url }))
        .map_err(ReviewError::from)
}

/// Review url for `prefs` at the current time
pub fn review_url_for(
    prefs: &UserPreferences,
    ctx: &ReviewContext,
) -> Result<String, WindowOutOfRange> {
    generate_review_url(
        prefs,
        &DefaultSettings::default(),
        &ctx.sys.get_local_datetime(),
        &mut rand::thread_rng(),
    )
}

#[derive(Debug)]
pub struct GetReviewUrlUseCase {
    pub preferences: UserPreferences,
}

#[derive(Debug)]
pub enum UseCaseError {
    NoReviewWindow(WindowOutOfRange),
}

impl From<UseCaseError> for ReviewError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NoReviewWindow(e) => Self::InvalidPayload(e.to_string()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReviewUrlUseCase {
    type Response = String;
    type Error = UseCaseError;

    const NAME: &'static str = "GetReviewUrl";

    async fn execute(&mut self, ctx: &ReviewContext) -> Result<Self::Response, Self::Error> {
        review_url_for(&self.preferences, ctx).map_err(UseCaseError::NoReviewWindow)
    }
}
