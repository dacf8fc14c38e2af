use crate::reminder::{
    handle_alarm::HandleAlarmUseCase, notification_clicked::NotificationClickedUseCase,
};
use crate::shared::usecase::execute;
use tracing::info;
use wf_review_domain::RecentFireKeys;
use wf_review_infra::{HostEvent, HostEventReceiver, ReviewContext};

/// Consumes host events one at a time until every sender is gone
pub fn start_host_event_loop(ctx: ReviewContext, mut events: HostEventReceiver) {
    actix_web::rt::spawn(async move {
        let mut recent_fires = RecentFireKeys::default();
        while let Some(event) = events.recv().await {
            handle_host_event(event, &mut recent_fires, &ctx).await;
        }
        info!("Host event channel closed, no more reminders will be handled");
    });
}

pub async fn handle_host_event(
    event: HostEvent,
    recent_fires: &mut RecentFireKeys,
    ctx: &ReviewContext,
) {
    // Use case errors are logged by `execute`
    match event {
        HostEvent::AlarmFired(alarm) => {
            let usecase = HandleAlarmUseCase {
                alarm,
                recent_fires,
            };
            let _ = execute(usecase, ctx).await;
        }
        HostEvent::NotificationClicked(notification_id) => {
            let _ = execute(NotificationClickedUseCase { notification_id }, ctx).await;
        }
        HostEvent::NotificationClosed(notification_id) => {
            info!("Notification {} dismissed", notification_id);
        }
    }
}
