use super::get_review_url::review_url_for;
use crate::shared::usecase::UseCase;
use tracing::{info, warn};
use wf_review_domain::{DefaultSettings, WindowOutOfRange};
use wf_review_infra::ReviewContext;

/// Opens the review url behind a clicked notification
#[derive(Debug)]
pub struct NotificationClickedUseCase {
    pub notification_id: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    NoReviewWindow(WindowOutOfRange),
    OpenTabFailed(anyhow::Error),
}

impl NotificationClickedUseCase {
    /// The url stored by the last fire, or a freshly generated one when
    /// there is none or it can't be read
    async fn review_url(&self, ctx: &ReviewContext) -> Result<String, WindowOutOfRange> {
        match ctx.repos.settings_repo.load_last_review_url().await {
            Ok(Some(url)) => return Ok(url),
            Ok(None) => info!("No stored review url, generating a new one"),
            Err(e) => warn!("Unable to read the stored review url. Error: {:?}", e),
        }
        let preferences = match ctx.repos.settings_repo.load().await {
            Ok(record) => record.preferences_or_defaults(&DefaultSettings::default()),
            Err(e) => {
                warn!("Unable to read settings, using defaults. Error: {:?}", e);
                DefaultSettings::default().to_user_preferences()
            }
        };
        review_url_for(&preferences, ctx)
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for NotificationClickedUseCase {
    /// The url that was opened
    type Response = String;
    type Error = UseCaseError;

    const NAME: &'static str = "NotificationClicked";

    async fn execute(&mut self, ctx: &ReviewContext) -> Result<Self::Response, Self::Error> {
        // Clearing an already closed notification is not an error
        if let Err(e) = ctx.hosts.notifications.clear(&self.notification_id).await {
            warn!(
                "Unable to clear notification {}. Error: {:?}",
                self.notification_id, e
            );
        }

        let url = self
            .review_url(ctx)
            .await
            .map_err(UseCaseError::NoReviewWindow)?;
        ctx.hosts
            .tabs
            .open(&url)
            .await
            .map_err(UseCaseError::OpenTabFailed)?;
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usecase::execute;
    use wf_review_domain::parse_query_date;
    use wf_review_infra::{Config, INotificationCenter, NotificationOptions};

    #[actix_web::main]
    #[test]
    async fn it_opens_the_stored_url_and_clears_the_notification() {
        let (ctx, hosts, _events) = ReviewContext::create_inmemory(Config::inmemory());
        let id = hosts
            .notifications
            .create(NotificationOptions {
                title: "WorkFlowy Review".into(),
                message: "tip".into(),
                icon_url: "icon.png".into(),
                require_interaction: true,
            })
            .await
            .unwrap();
        ctx.repos
            .settings_repo
            .save_last_review_url("https://workflowy.com/#?q=stored")
            .await
            .unwrap();

        let opened = execute(
            NotificationClickedUseCase {
                notification_id: id.clone(),
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(opened, "https://workflowy.com/#?q=stored");
        assert_eq!(hosts.tabs.opened(), vec![opened]);
        assert!(hosts.notifications.active().is_empty());

        // A second click on the same notification still opens the url
        execute(NotificationClickedUseCase { notification_id: id }, &ctx)
            .await
            .unwrap();
        assert_eq!(hosts.tabs.opened().len(), 2);
    }

    #[actix_web::main]
    #[test]
    async fn it_regenerates_without_a_stored_url() {
        let (ctx, hosts, _events) = ReviewContext::create_inmemory(Config::inmemory());
        let opened = execute(
            NotificationClickedUseCase {
                notification_id: "unknown".into(),
            },
            &ctx,
        )
        .await
        .unwrap();

        let query = opened
            .strip_prefix("https://workflowy.com/#?q=last-changed-since:")
            .expect("A default review url");
        assert!(parse_query_date(&query[..10]).is_some());
        assert_eq!(hosts.tabs.opened(), vec![opened.clone()]);
    }
}
