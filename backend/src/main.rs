//! Service entry point: wires the REST endpoints, health probes, and (in
//! debug builds) the OpenAPI docs.

use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use user_service::ApiDoc;
use user_service::inbound::http::health::{HealthState, live, ready};
use user_service::server::{ServerConfig, build_state, configure_api};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env();
    let state = web::Data::new(build_state(&config));
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the probes stay reachable here.
    let server_state = state.clone();
    let server_health_state = health_state.clone();

    info!(addr = %config.bind_addr, seeded = config.seed_sample_data, "starting user service");
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(server_health_state.clone())
            .configure(|cfg| configure_api(cfg, server_state.clone()))
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(config.bind_addr)?;

    health_state.mark_ready();
    server.run().await
}
