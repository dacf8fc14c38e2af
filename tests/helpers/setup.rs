use std::time::Duration;
use wf_review_api::Application;
use wf_review_infra::{Config, InMemoryHosts, ReviewContext};
use wf_review_sdk::ReviewSDK;

pub struct TestApp {
    pub ctx: ReviewContext,
    /// The hosts the application runs against, for inspection and for
    /// injecting host events
    pub hosts: InMemoryHosts,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, ReviewSDK, String) {
    let (ctx, hosts, host_events) = ReviewContext::create_inmemory(Config::inmemory());

    let application = Application::new(ctx.clone(), host_events)
        .await
        .expect("Failed to build application.");

    let address = format!("http://127.0.0.1:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { ctx, hosts };
    let sdk = ReviewSDK::new(address.clone());
    (app, sdk, address)
}

/// Polls `condition` until it holds, giving the host event loop time to
/// catch up
pub async fn wait_until<F: Fn() -> bool>(condition: F) -> bool {
    for _ in 0..100 {
        if condition() {
            return true;
        }
        actix_web::rt::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
