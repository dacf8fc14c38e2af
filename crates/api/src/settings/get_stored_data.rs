use crate::error::ReviewError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::HttpResponse;
use wf_review_api_structs::get_stored_data::*;
use wf_review_domain::SettingsRecord;
use wf_review_infra::ReviewContext;

pub async fn get_stored_data_controller(ctx: &ReviewContext) -> Result<HttpResponse, ReviewError> {
    execute(GetStoredDataUseCase {}, ctx)
        .await
        .map(|record| HttpResponse::Ok().json(APIResponse::new(record)))
        .map_err(ReviewError::from)
}

#[derive(Debug)]
pub struct GetStoredDataUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for ReviewError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError(e) => Self::PersistenceFailure(e.to_string()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetStoredDataUseCase {
    type Response = SettingsRecord;
    type Error = UseCaseError;

    const NAME: &'static str = "GetStoredData";

    async fn execute(&mut self, ctx: &ReviewContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .settings_repo
            .load()
            .await
            .map_err(UseCaseError::StorageError)
    }
}
