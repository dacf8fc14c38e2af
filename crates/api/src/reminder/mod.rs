pub mod get_all_alarms;
pub mod get_review_url;
pub mod handle_alarm;
pub mod initialize_reminder;
pub mod notification_clicked;
pub mod set_reminder;
mod subscribers;
