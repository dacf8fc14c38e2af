use crate::error::ReviewError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::HttpResponse;
use wf_review_api_structs::dtos::AlarmDTO;
use wf_review_api_structs::get_all_alarms::*;
use wf_review_domain::Alarm;
use wf_review_infra::ReviewContext;

pub async fn get_all_alarms_controller(ctx: &ReviewContext) -> Result<HttpResponse, ReviewError> {
    execute(GetAllAlarmsUseCase {}, ctx)
        .await
        .map(|alarms| {
            HttpResponse::Ok().json(APIResponse {
                alarms: alarms.into_iter().map(AlarmDTO::new).collect(),
            })
        })
        .map_err(ReviewError::from)
}

#[derive(Debug)]
pub struct GetAllAlarmsUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    TimerFacilityFailure(anyhow::Error),
}

impl From<UseCaseError> for ReviewError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::TimerFacilityFailure(e) => Self::TimerFacilityFailure(e.to_string()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetAllAlarmsUseCase {
    type Response = Vec<Alarm>;
    type Error = UseCaseError;

    const NAME: &'static str = "GetAllAlarms";

    async fn execute(&mut self, ctx: &ReviewContext) -> Result<Self::Response, Self::Error> {
        ctx.hosts
            .alarms
            .get_all()
            .await
            .map_err(UseCaseError::TimerFacilityFailure)
    }
}
