use super::set_reminder::{self, SetReminderUseCase};
use crate::shared::usecase::{execute, UseCase};
use tracing::info;
use wf_review_domain::{DefaultSettings, UserPreferences};
use wf_review_infra::ReviewContext;

/// Arms the reminder when the service starts. Nothing stored means a fresh
/// install, which arms with the defaults. Otherwise the stored preferences
/// are re-armed.
#[derive(Debug)]
pub struct InitializeReminderUseCase {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Install,
    Startup,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError(anyhow::Error),
    ArmFailed(set_reminder::UseCaseError),
}

#[async_trait::async_trait(?Send)]
impl UseCase for InitializeReminderUseCase {
    type Response = Lifecycle;
    type Error = UseCaseError;

    const NAME: &'static str = "InitializeReminder";

    async fn execute(&mut self, ctx: &ReviewContext) -> Result<Self::Response, Self::Error> {
        let defaults = DefaultSettings::default();
        let stored = ctx
            .repos
            .settings_repo
            .load()
            .await
            .map_err(UseCaseError::StorageError)?;

        let (lifecycle, preferences) = if stored.is_empty() {
            (Lifecycle::Install, defaults.to_user_preferences())
        } else {
            (Lifecycle::Startup, stored.preferences_or_defaults(&defaults))
        };
        info!("Initializing review reminder on {:?}", lifecycle);

        execute(arm_with(preferences), ctx)
            .await
            .map_err(UseCaseError::ArmFailed)?;
        Ok(lifecycle)
    }
}

fn arm_with(preferences: UserPreferences) -> SetReminderUseCase {
    SetReminderUseCase {
        interval: preferences.interval_minutes,
        tip: preferences.tip_text.clone(),
        preferences,
    }
}
