//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::{JobReceiver, build_http_state, build_replication_worker};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tokio::task::JoinHandle;
use tracing::info;

use detail_relay::Trace;
#[cfg(debug_assertions)]
use detail_relay::doc::ApiDoc;
use detail_relay::domain::ReplicationRunSummary;
use detail_relay::inbound::http::details::{create_detail, get_detail};
use detail_relay::inbound::http::error::{json_error_handler, path_error_handler};
use detail_relay::inbound::http::health::{HealthState, live, ready};
use detail_relay::inbound::http::state::HttpState;
use detail_relay::inbound::http::users::create_user;
use detail_relay::outbound::queue::ChannelReplicationQueue;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .wrap(Trace)
        .service(create_user)
        .service(create_detail)
        .service(get_detail)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Running server plus the replication worker it feeds.
pub struct RelayServer {
    /// HTTP server future; resolves once the server has stopped.
    pub server: Server,
    /// Worker task; resolves once every queue handle is dropped and pending
    /// jobs have drained.
    pub worker: JoinHandle<ReplicationRunSummary>,
}

fn spawn_worker(config: &ServerConfig, jobs: JobReceiver) -> JoinHandle<ReplicationRunSummary> {
    let worker = build_replication_worker(&config.replica_pool, config.replication);
    tokio::spawn(worker.run(jobs))
}

/// Construct the Actix HTTP server and spawn the replication worker.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<RelayServer> {
    let (queue, jobs) = ChannelReplicationQueue::channel();
    let http_state = build_http_state(&config.primary_pool, &config.replica_pool, queue);
    let worker = spawn_worker(&config, jobs);

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    info!(host = %config.host, port = config.port, "http server listening");
    health_state.mark_ready();
    Ok(RelayServer { server, worker })
}
