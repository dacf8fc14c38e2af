mod helpers;

use helpers::setup::{spawn_app, wait_until};
use serde_json::json;
use wf_review_domain::{Alarm, YearsBack, REVIEW_ALARM_NAME};
use wf_review_infra::{HostEvent, IAlarmFacility, PageContext};
use wf_review_sdk::{APIError, GenerationMode, PreferencesInput, ReviewSDK};

fn preferences(interval: serde_json::Value) -> PreferencesInput {
    PreferencesInput {
        base_url: Some("https://workflowy.com/#/abc".into()),
        tag: Some("#review".into()),
        interval_minutes: Some(interval),
        tip_text: Some("Time to review".into()),
        mode: None,
    }
}

async fn rejection(sdk: &ReviewSDK, request: serde_json::Value) -> String {
    let err = sdk
        .send_raw(&request)
        .await
        .expect_err("Expected the message to be rejected");
    err.error_message()
        .expect("Expected an error body")
        .to_string()
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::main]
#[test]
async fn test_fresh_install_arms_defaults() {
    let (_, sdk, _) = spawn_app().await;

    let alarms = sdk.reminder.get_all_alarms().await.unwrap().alarms;
    assert_eq!(alarms.len(), 1);
    assert_eq!(alarms[0].name, REVIEW_ALARM_NAME);
    assert_eq!(alarms[0].period_in_minutes, Some(240));
    assert_eq!(alarms[0].scheduled_time_str.len(), 19);

    let stored = sdk.settings.get_stored().await.unwrap();
    assert_eq!(stored.interval, Some(240));
    assert_eq!(stored.user_data.unwrap().interval_minutes, 240);
}

#[actix_web::main]
#[test]
async fn test_arming_twice_keeps_one_alarm() {
    let (app, sdk, _) = spawn_app().await;

    assert!(sdk.reminder.set(&preferences(json!(30))).await.unwrap().ok);
    assert!(sdk.reminder.set(&preferences(json!("45"))).await.unwrap().ok);

    let alarms = sdk.reminder.get_all_alarms().await.unwrap().alarms;
    assert_eq!(alarms.len(), 1);
    assert_eq!(alarms[0].period_in_minutes, Some(45));

    let stored = sdk.settings.get_stored().await.unwrap();
    assert_eq!(stored.interval, Some(45));
    assert_eq!(stored.tip, Some("Time to review".into()));
    let user_data = stored.user_data.unwrap();
    assert_eq!(user_data.tag, "#review");
    assert_eq!(user_data.interval_minutes, 45);

    let now = app.ctx.sys.get_timestamp_millis();
    let scheduled = app.hosts.alarms.get_all().await.unwrap()[0].scheduled_time;
    assert!(scheduled > now + 44 * 60 * 1000);
    assert!(scheduled <= now + 45 * 60 * 1000);
}

#[actix_web::main]
#[test]
async fn test_invalid_interval_is_rejected_without_changes() {
    let (_, sdk, _) = spawn_app().await;

    for interval in vec![json!(0), json!(-3), json!("soon"), json!(null)] {
        let err = sdk
            .reminder
            .set(&preferences(interval))
            .await
            .expect_err("Expected the interval to be rejected");
        assert!(err.error_message().unwrap().contains("interval"));
    }

    let alarms = sdk.reminder.get_all_alarms().await.unwrap().alarms;
    assert_eq!(alarms.len(), 1);
    assert_eq!(alarms[0].period_in_minutes, Some(240));
    assert_eq!(sdk.settings.get_stored().await.unwrap().interval, Some(240));
}

#[actix_web::main]
#[test]
async fn test_malformed_messages_are_rejected() {
    let (_, sdk, _) = spawn_app().await;

    assert_eq!(
        rejection(&sdk, json!({ "action": "reticulateSplines" })).await,
        "unknown_action"
    );
    assert_eq!(
        rejection(&sdk, json!({ "payload": {} })).await,
        "invalid_message"
    );
    assert_eq!(rejection(&sdk, json!({ "action": "" })).await, "invalid_message");
    assert_eq!(rejection(&sdk, json!("getReviewUrl")).await, "invalid_message");
}

#[actix_web::main]
#[test]
async fn test_get_review_url() {
    let (_, sdk, _) = spawn_app().await;

    let url = sdk
        .reminder
        .get_review_url(&preferences(json!(30)))
        .await
        .unwrap()
        .url;
    assert!(url.starts_with("https://workflowy.com/#/abc?q=last-changed-since:"));
    assert!(url.ends_with("%20#review"));

    let url = sdk
        .reminder
        .get_review_url(&PreferencesInput::default())
        .await
        .unwrap()
        .url;
    assert!(url.starts_with("https://workflowy.com/#?q=last-changed-since:"));
}

#[actix_web::main]
#[test]
async fn test_years_ago_mode_needs_a_historical_window() {
    let (_, sdk, _) = spawn_app().await;

    let mut input = preferences(json!(30));
    input.mode = Some(GenerationMode::YearsAgo {
        years: YearsBack::new(1).unwrap(),
    });
    let url = sdk.reminder.get_review_url(&input).await.unwrap().url;
    assert!(url.contains("last-changed-since:"));

    for years in vec![json!(0), json!(1_000_000), json!(u32::MAX)] {
        let payload = json!({
            "intervalMinutes": 30,
            "mode": { "kind": "yearsAgo", "years": years }
        });
        for action in &["getReviewUrl", "setReminder"] {
            let error = rejection(&sdk, json!({ "action": action, "payload": payload })).await;
            assert!(error.starts_with("invalid_payload"), "{}: {}", action, error);
        }
    }

    // The rejected setReminder calls left the install alarm in place
    let alarms = sdk.reminder.get_all_alarms().await.unwrap().alarms;
    assert_eq!(alarms.len(), 1);
    assert_eq!(alarms[0].period_in_minutes, Some(240));
}

#[actix_web::main]
#[test]
async fn test_host_failures_are_reported_as_server_errors() {
    let (app, sdk, _) = spawn_app().await;

    app.hosts.alarms.set_unavailable(true);
    match sdk.reminder.set(&preferences(json!(30))).await {
        Err(APIError::Rejected { status, error }) => {
            assert_eq!(status.as_u16(), 500);
            assert!(error.contains("alarm facility"));
        }
        res => panic!("Expected a timer facility failure, got {:?}", res),
    }
    app.hosts.alarms.set_unavailable(false);

    app.hosts.storage.set_unavailable(true);
    match sdk.reminder.set(&preferences(json!(30))).await {
        Err(APIError::Rejected { status, error }) => {
            assert_eq!(status.as_u16(), 500);
            assert!(error.contains("settings"));
        }
        res => panic!("Expected a persistence failure, got {:?}", res),
    }
}

#[actix_web::main]
#[test]
async fn test_default_data() {
    let (_, sdk, _) = spawn_app().await;

    let defaults = sdk.settings.get_defaults().await.unwrap().data;
    assert_eq!(defaults.default_user_url, "https://workflowy.com/#");
    assert_eq!(defaults.default_query_url, "https://workflowy.com/#?q=");
    assert_eq!(defaults.default_tag, "");
    assert_eq!(defaults.default_interval, 240);

    let prefs = sdk.settings.get_default_preferences().await.unwrap().data;
    assert_eq!(prefs.base_url, defaults.default_user_url);
    assert_eq!(prefs.interval_minutes, 240);
    assert_eq!(prefs.tip_text, defaults.default_tip);
}

#[actix_web::main]
#[test]
async fn test_build_user_storage_data_prefers_stored_settings() {
    let (_, sdk, _) = spawn_app().await;
    sdk.reminder.set(&preferences(json!(30))).await.unwrap();

    let input = PreferencesInput {
        base_url: Some("https://workflowy.com/#/other".into()),
        tag: Some("#other".into()),
        interval_minutes: Some(json!(5)),
        tip_text: Some("other tip".into()),
        mode: None,
    };
    let merged = sdk.settings.build_storage_data(&input).await.unwrap();
    assert_eq!(merged.base_url, "https://workflowy.com/#/abc");
    assert_eq!(merged.tag, "#review");
    assert_eq!(merged.interval_minutes, 30);
    assert_eq!(merged.tip_text, "Time to review");
}

#[actix_web::main]
#[test]
async fn test_fire_notify_and_click_opens_the_stored_url() {
    let (app, sdk, _) = spawn_app().await;
    sdk.reminder.set(&preferences(json!(30))).await.unwrap();
    app.hosts.clipboard.open_context(PageContext::new("tab-1"));

    let fire = Alarm::new(REVIEW_ALARM_NAME, 1_700_000_000_000, Some(30));
    // The host may deliver the same fire twice
    for _ in 0..2 {
        app.hosts
            .events
            .send(HostEvent::AlarmFired(fire.clone()))
            .unwrap();
    }
    let notifications = app.hosts.notifications.clone();
    assert!(wait_until(|| !notifications.created().is_empty()).await);

    let stored_url = app
        .ctx
        .repos
        .settings_repo
        .load_last_review_url()
        .await
        .unwrap()
        .expect("Expected the fire to store the review url");
    assert!(stored_url.ends_with("%20#review"));
    assert_eq!(
        app.hosts.clipboard.copies(),
        vec![("tab-1".to_string(), stored_url.clone())]
    );

    let (notification_id, options) = notifications.created()[0].clone();
    assert_eq!(options.message, "Time to review");

    app.hosts
        .events
        .send(HostEvent::NotificationClicked(notification_id))
        .unwrap();
    let tabs = app.hosts.tabs.clone();
    assert!(wait_until(|| !tabs.opened().is_empty()).await);
    assert_eq!(tabs.opened(), vec![stored_url]);
    assert!(notifications.active().is_empty());
    // The duplicate fire was dropped
    assert_eq!(notifications.created().len(), 1);
}

#[actix_web::main]
#[test]
async fn test_diagnostics() {
    let (app, sdk, _) = spawn_app().await;

    assert_eq!(sdk.diagnostics.send_test().await.unwrap().result, "ok");
    let reply = sdk.diagnostics.send_lark_msg("hello").await.unwrap();
    assert_eq!(reply.result["StatusCode"], 0);
    assert_eq!(app.hosts.outbound.posted()[0].content.text, "hello");

    app.hosts.outbound.set_offline(true);
    let err = sdk.diagnostics.send_test().await.unwrap_err();
    assert!(err.error_message().unwrap().contains("Outbound request failed"));
}
