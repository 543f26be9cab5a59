//! fontseca.dev · HTTP handler layer
//!
//! - Axum endpoints for the archive (articles, drafts, patches, tags, topics)
//!   and the portfolio (me, projects, experience, technologies)
//! - Server-rendered pages through an injected `Renderer`
//! - Errors reported as `application/problem+json`
//!
//! Business logic, persistence and templating are injected through the
//! traits in [`services`].
//!
//! Important env variables:
//!   PORT                 : u16 (default 3000)
//!   FONTSECA_CONFIG_PATH : path to TOML config
//!   LOG_LEVEL            : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT           : "pretty" (default) or "json"

pub mod config;
pub mod domain;
pub mod extract;
pub mod problem;
pub mod protocol;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod validation;

use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tracing::{info, instrument};

pub use config::ServerConfig;
pub use problem::{Problem, ServiceError, ServiceResult};
pub use routes::build_router;
pub use state::AppState;
pub use validation::RequestValidator;

/// Serves the application on `0.0.0.0:{config.port}` until Ctrl-C. Installs
/// the tracing subscriber unless the embedding binary already did.
pub async fn run(config: ServerConfig, state: AppState) -> std::io::Result<()> {
  telemetry::init_tracing();
  serve(config, state).await
}

#[instrument(level = "info", skip_all, fields(port = config.port))]
async fn serve(config: ServerConfig, state: AppState) -> std::io::Result<()> {
  let app = build_router(Arc::new(state), &config);

  let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
  let listener = TcpListener::bind(addr).await?;
  info!(target: "fontseca", %addr, static_dir = %config.static_dir, "HTTP server listening");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  info!(target: "fontseca", "HTTP server stopped");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(err) = tokio::signal::ctrl_c().await {
    tracing::error!(target: "fontseca", error = %err, "failed to listen for shutdown signal");
  }
}
