// src/lib.rs

//! Prometheus exporter for Warp10 Sensision metrics.
//!
//! Warp10 exposes internal telemetry through Sensision, a line-oriented
//! text format. This crate fetches that payload on every Prometheus scrape,
//! decodes each line against a pre-declared metric vocabulary and re-emits
//! the matches as labeled gauges on an HTTP endpoint.
//!
//! The interesting part lives in [`decode`] (line format → [`Sample`]) and
//! [`MetricRegistry`] (the closed vocabulary); [`Exporter`] wires them to
//! the upstream endpoint and the rest is HTTP plumbing.

use anyhow::Result;
use axum::{routing::get, Router};
use std::sync::Arc;

// Internal-only modules (sibling access within this crate)
mod app_state;
mod config;
mod decode;
mod exporter;
mod handlers;
mod registry;
mod sensision;

// Hoist up only the public symbols
pub use config::Config;
pub use decode::{decode, Sample};
pub use exporter::Exporter;
pub use registry::{MetricDescriptor, MetricRegistry};

use app_state::AppState;
use handlers::{metrics_handler, root_handler};

/// Build the HTTP router for the given configuration.
///
/// # Errors
/// Fails when the Sensision URL is malformed or the telemetry path is not
/// an absolute route; both are startup errors, no exporter is created.
pub fn create_router(config: &Config) -> Result<Router> {
    // ---
    if !config.telemetry_path.starts_with('/') {
        anyhow::bail!(
            "telemetry path must start with '/': {}",
            config.telemetry_path
        );
    }

    let registry = Arc::new(MetricRegistry::sensision());
    let exporter = Arc::new(Exporter::new(&config.warp10_url, registry)?);

    let app_state = AppState::new(exporter, config.telemetry_path.clone());

    let router = Router::new()
        .route("/", get(root_handler))
        .route(&config.telemetry_path, get(metrics_handler))
        .with_state(app_state);

    Ok(router)
}

/// Run the exporter until the server terminates.
pub async fn run(config: Config) -> Result<()> {
    // ---
    let app = create_router(&config)?;

    let listener = tokio::net::TcpListener::bind(&config.listen_address).await?;
    tracing::info!(address = %config.listen_address, "listening on address");
    axum::serve(listener, app).await?;

    Ok(())
}
