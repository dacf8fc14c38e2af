mod diagnostics;
mod error;
mod host_events;
mod message;
mod reminder;
mod settings;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use host_events::start_host_event_loop;
use reminder::initialize_reminder::InitializeReminderUseCase;
use shared::usecase::execute;
use std::net::TcpListener;
use tracing::{error, info};
use tracing_actix_web::TracingLogger;
use wf_review_infra::{HostEventReceiver, ReviewContext};

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    message::configure_routes(cfg);
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    /// Arms the reminder, starts consuming host events and binds the
    /// message api
    pub async fn new(
        context: ReviewContext,
        host_events: HostEventReceiver,
    ) -> Result<Self, std::io::Error> {
        Application::initialize_reminder(&context).await;
        start_host_event_loop(context.clone(), host_events);
        let (server, port) = Application::configure_server(context).await?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// A failure leaves the service running without an active reminder
    async fn initialize_reminder(context: &ReviewContext) {
        match execute(InitializeReminderUseCase {}, context).await {
            Ok(lifecycle) => info!("Review reminder initialized on {:?}", lifecycle),
            Err(e) => error!("Unable to initialize the review reminder: {:?}", e),
        }
    }

    async fn configure_server(context: ReviewContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("127.0.0.1:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(2)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
