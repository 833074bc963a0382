//! # Quill API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use middleware::cors::cors_policy;
use middleware::request_id::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Quill API Server on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        origins = ?config.allowed_origins,
        public_base_url = %config.public_base_url,
        "CORS and upload links configured"
    );

    let state = AppState::new(&config).await?;

    let bind = (config.host.clone(), config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_policy(&config.allowed_origins))
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure(state.clone(), config.clone()))
    })
    .bind(bind)?
    .run()
    .await
}
