use crate::diagnostics::{
    send_lark_msg::send_lark_msg_controller, send_test::send_test_controller,
};
use crate::error::ReviewError;
use crate::reminder::{
    get_all_alarms::get_all_alarms_controller, get_review_url::get_review_url_controller,
    set_reminder::set_reminder_controller,
};
use crate::settings::{
    build_user_storage_data::build_user_storage_data_controller,
    get_default_data::get_default_data_controller, get_stored_data::get_stored_data_controller,
    trans_to_user_data::trans_to_user_data_controller,
};
use crate::shared::guard::Guard;
use actix_web::{web, HttpResponse};
use tracing::info;
use wf_review_api_structs::*;
use wf_review_infra::ReviewContext;

/// Answers one `{action, payload}` message
pub async fn message_controller(
    body: web::Bytes,
    ctx: web::Data<ReviewContext>,
) -> Result<HttpResponse, ReviewError> {
    let message: MessageRequest =
        serde_json::from_slice(&body).map_err(|_| ReviewError::InvalidMessage)?;
    let action = match message.action.as_deref() {
        Some(action) if !action.is_empty() => action,
        _ => return Err(ReviewError::InvalidMessage),
    };
    info!("Received message: {}", action);

    let payload = message.payload;
    match action {
        get_review_url::ACTION => {
            get_review_url_controller(Guard::against_malformed_payload(payload)?, &ctx).await
        }
        set_reminder::ACTION => {
            set_reminder_controller(Guard::against_malformed_payload(payload)?, &ctx).await
        }
        get_stored_data::ACTION => get_stored_data_controller(&ctx).await,
        get_all_alarms::ACTION => get_all_alarms_controller(&ctx).await,
        get_default_data::ACTION => Ok(get_default_data_controller()),
        trans_to_user_data::ACTION => Ok(trans_to_user_data_controller()),
        build_user_storage_data::ACTION => {
            build_user_storage_data_controller(Guard::against_malformed_payload(payload)?, &ctx)
                .await
        }
        send_test::ACTION => send_test_controller(&ctx).await,
        send_lark_msg::ACTION => {
            send_lark_msg_controller(Guard::against_malformed_payload(payload)?, &ctx).await
        }
        _ => Err(ReviewError::UnknownAction),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/message", web::post().to(message_controller));
}
