use crate::error::ReviewError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::HttpResponse;
use tracing::info;
use wf_review_api_structs::set_reminder::*;
use wf_review_domain::{Alarm, IntervalMinutes, SettingsRecord, UserPreferences, REVIEW_ALARM_NAME};
use wf_review_infra::ReviewContext;

pub async fn set_reminder_controller(
    body: RequestBody,
    ctx: &ReviewContext,
) -> Result<HttpResponse, ReviewError> {
    let interval = body.interval()?;
    let preferences = body.into_preferences(interval);
    let usecase = SetReminderUseCase {
        interval,
        tip: preferences.tip_text.clone(),
        preferences,
    };

    execute(usecase, ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse { ok: true }))
        .map_err(ReviewError::from)
}

/// Replaces whatever alarm is active with the review reminder and stores
/// the settings it was armed with
#[derive(Debug)]
pub struct SetReminderUseCase {
    pub interval: IntervalMinutes,
    pub tip: String,
    pub preferences: UserPreferences,
}

#[derive(Debug)]
pub enum UseCaseError {
    TimerFacilityFailure(anyhow::Error),
    StorageError(anyhow::Error),
}

impl From<UseCaseError> for ReviewError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::TimerFacilityFailure(e) => Self::TimerFacilityFailure(e.to_string()),
            UseCaseError::StorageError(e) => Self::PersistenceFailure(e.to_string()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetReminderUseCase {
    type Response = Alarm;
    type Error = UseCaseError;

    const NAME: &'static str = "SetReminder";

    async fn execute(&mut self, ctx: &ReviewContext) -> Result<Self::Response, Self::Error> {
        let first_fire = ctx.sys.get_timestamp_millis() + self.interval.as_millis();

        ctx.hosts
            .alarms
            .clear_all()
            .await
            .map_err(UseCaseError::TimerFacilityFailure)?;
        ctx.hosts
            .alarms
            .create(REVIEW_ALARM_NAME, first_fire, self.interval.minutes())
            .await
            .map_err(UseCaseError::TimerFacilityFailure)?;
        info!(
            "Review reminder armed, first fire at {} and then every {} minutes",
            first_fire, self.interval
        );

        let record = SettingsRecord::new(self.interval, self.tip.clone(), self.preferences.clone());
        ctx.repos
            .settings_repo
            .save(&record)
            .await
            .map_err(UseCaseError::StorageError)?;

        Ok(Alarm::new(
            REVIEW_ALARM_NAME,
            first_fire,
            Some(self.interval.minutes()),
        ))
    }
}
