mod telemetry;

use telemetry::{get_subscriber, init_subscriber};
use wf_review_api::Application;
use wf_review_infra::setup_context;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("wf_review".into(), "info".into());
    init_subscriber(subscriber)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let (context, host_events) = setup_context();

    let app = Application::new(context, host_events).await?;
    app.start().await
}
