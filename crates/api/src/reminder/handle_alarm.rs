use super::get_review_url::review_url_for;
use super::subscribers::{CopyReviewUrlToClipboard, ShowReviewNotification};
use crate::shared::usecase::{Subscriber, UseCase};
use tracing::{info, warn};
use wf_review_domain::{Alarm, DefaultSettings, RecentFireKeys, WindowOutOfRange, FALLBACK_TIP};
use wf_review_infra::ReviewContext;

/// Turns a fired alarm into a fresh review url. Copying the url and
/// notifying the user happen in the subscribers.
#[derive(Debug)]
pub struct HandleAlarmUseCase<'a> {
    pub alarm: Alarm,
    /// Fires handled so far, owned by the host event loop
    pub recent_fires: &'a mut RecentFireKeys,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FireOutcome {
    /// Not the review reminder
    Ignored,
    /// This fire has already been handled
    Duplicate,
    Generated { url: String, tip: String },
}

#[derive(Debug)]
pub enum UseCaseError {
    NoReviewWindow(WindowOutOfRange),
}

#[async_trait::async_trait(?Send)]
impl<'a> UseCase for HandleAlarmUseCase<'a> {
    type Response = FireOutcome;
    type Error = UseCaseError;

    const NAME: &'static str = "HandleAlarm";

    async fn execute(&mut self, ctx: &ReviewContext) -> Result<Self::Response, Self::Error> {
        if !self.alarm.is_review_reminder() {
            return Ok(FireOutcome::Ignored);
        }
        let fire_key = self.alarm.fire_key();
        if !self.recent_fires.insert(fire_key.clone()) {
            info!("Alarm fire {} was already handled, skipping", fire_key);
            return Ok(FireOutcome::Duplicate);
        }

        let (preferences, tip) = match ctx.repos.settings_repo.load().await {
            Ok(record) => (
                record.preferences_or_defaults(&DefaultSettings::default()),
                record.tip_or_fallback(),
            ),
            Err(e) => {
                warn!("Unable to read settings, using defaults. Error: {:?}", e);
                (
                    DefaultSettings::default().to_user_preferences(),
                    FALLBACK_TIP.to_string(),
                )
            }
        };

        let url = review_url_for(&preferences, ctx).map_err(UseCaseError::NoReviewWindow)?;
        info!("Generated review url: {}", url);
        if let Err(e) = ctx.repos.settings_repo.save_last_review_url(&url).await {
            warn!("Unable to store the review url. Error: {:?}", e);
        }

        Ok(FireOutcome::Generated { url, tip })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![
            Box::new(CopyReviewUrlToClipboard),
            Box::new(ShowReviewNotification),
        ]
    }
}
