use crate::error::ReviewError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::HttpResponse;
use wf_review_api_structs::build_user_storage_data::*;
use wf_review_domain::{DefaultSettings, UserPreferences};
use wf_review_infra::ReviewContext;

pub async fn build_user_storage_data_controller(
    body: RequestBody,
    ctx: &ReviewContext,
) -> Result<HttpResponse, ReviewError> {
    let interval = body.interval_or(DefaultSettings::default().default_interval)?;
    let usecase = BuildUserStorageDataUseCase {
        preferences: body.into_preferences(interval),
    };

    execute(usecase, ctx)
        .await
        .map(|merged| HttpResponse::Ok().json(APIResponse::new(merged)))
        .map_err(ReviewError::from)
}

/// Lays the stored settings over preferences coming from the settings panel
#[derive(Debug)]
pub struct BuildUserStorageDataUseCase {
    pub preferences: UserPreferences,
}

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
impl UseCase for BuildUserStorageDataUseCase {
    type Response = UserPreferences;
    type Error = UseCaseError;

    const NAME: &'static str = "BuildUserStorageData";

    async fn execute(&mut self, ctx: &ReviewContext) -> Result<Self::Response, Self::Error> {
        let stored = ctx
            .repos
            .settings_repo
            .load()
            .await
            .map_err(UseCaseError::StorageError)?;
        Ok(self.preferences.clone().merge_with_stored(&stored))
    }
}
