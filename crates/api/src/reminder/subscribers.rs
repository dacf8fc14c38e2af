use super::handle_alarm::{FireOutcome, HandleAlarmUseCase};
use crate::shared::usecase::Subscriber;
use futures::future::join_all;
use thiserror::Error;
use tracing::{error, info, warn};
use wf_review_infra::{NotificationOptions, ReviewContext};

const NOTIFICATION_TITLE: &str = "WorkFlowy Review";

#[derive(Error, Debug)]
#[error("No page context accepted the clipboard write")]
pub struct ClipboardUnavailable;

/// Asks every reachable page context to copy `text`. Succeeds if any of
/// them did.
async fn copy_to_any_context(text: &str, ctx: &ReviewContext) -> Result<(), ClipboardUnavailable> {
    let contexts = match ctx.hosts.clipboard.contexts().await {
        Ok(contexts) => contexts,
        Err(e) => {
            warn!("Unable to list page contexts. Error: {:?}", e);
            return Err(ClipboardUnavailable);
        }
    };
    let copies = contexts
        .iter()
        .map(|context| ctx.hosts.clipboard.copy_text(context, text));
    let copied = join_all(copies).await.iter().any(|res| res.is_ok());
    if copied {
        Ok(())
    } else {
        Err(ClipboardUnavailable)
    }
}

pub struct CopyReviewUrlToClipboard;

#[async_trait::async_trait(?Send)]
impl<'a> Subscriber<HandleAlarmUseCase<'a>> for CopyReviewUrlToClipboard {
    async fn notify(&self, e: &FireOutcome, ctx: &ReviewContext) {
        if let FireOutcome::Generated { url, .. } = e {
            match copy_to_any_context(url, ctx).await {
                Ok(_) => info!("Review url copied to the clipboard"),
                Err(e) => warn!("{}", e),
            }
        }
    }
}

pub struct ShowReviewNotification;

#[async_trait::async_trait(?Send)]
impl<'a> Subscriber<HandleAlarmUseCase<'a>> for ShowReviewNotification {
    async fn notify(&self, e: &FireOutcome, ctx: &ReviewContext) {
        if let FireOutcome::Generated { tip, .. } = e {
            let options = NotificationOptions {
                title: NOTIFICATION_TITLE.into(),
                message: tip.clone(),
                icon_url: ctx.config.icon_url.clone(),
                require_interaction: true,
            };
            match ctx.hosts.notifications.create(options).await {
                Ok(id) => info!("Review notification {} shown", id),
                Err(e) => error!("Unable to show the review notification. Error: {:?}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_review_infra::{Config, PageContext};

    #[actix_web::main]
    #[test]
    async fn it_copies_when_any_context_accepts() {
        let (ctx, hosts, _events) = ReviewContext::create_inmemory(Config::inmemory());
        assert!(copy_to_any_context("url", &ctx).await.is_err());

        hosts.clipboard.open_failing_context(PageContext::new("broken"));
        assert!(copy_to_any_context("url", &ctx).await.is_err());

        hosts.clipboard.open_context(PageContext::new("tab"));
        assert!(copy_to_any_context("url", &ctx).await.is_ok());
        assert_eq!(hosts.clipboard.copies(), vec![("tab".to_string(), "url".to_string())]);
    }

    #[actix_web::main]
    #[test]
    async fn it_notifies_even_without_clipboard() {
        let (ctx, hosts, _events) = ReviewContext::create_inmemory(Config::inmemory());
        let outcome = FireOutcome::Generated {
            url: "url".into(),
            tip: "tip".into(),
        };
        CopyReviewUrlToClipboard.notify(&outcome, &ctx).await;
        ShowReviewNotification.notify(&outcome, &ctx).await;

        assert!(hosts.clipboard.copies().is_empty());
        assert_eq!(hosts.notifications.created().len(), 1);
        assert_eq!(hosts.notifications.created()[0].1.icon_url, "icon.png");
    }
}
