// src/config.rs

//! Command-line configuration surface.
//!
//! Flag names follow the exporter convention of dotted scopes
//! (`web.listen-address`, `warp10.url`); all flags have defaults, so the
//! binary runs with no arguments against a local Warp10. Validation beyond
//! parsing happens where the values are consumed: a malformed Sensision URL
//! is rejected when the exporter is constructed, a bad listen address when
//! the listener binds.

use clap::Parser;

/// Prometheus exporter for Warp10 Sensision metrics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "warp10_sensision_exporter",
    about = "Prometheus exporter for Warp10 Sensision metrics",
    version
)]
pub struct Config {
    /// Address to listen on for web interface and telemetry.
    #[arg(long = "web.listen-address", default_value = "0.0.0.0:9300")]
    pub listen_address: String,

    /// Path under which to expose metrics.
    #[arg(long = "web.telemetry-path", default_value = "/metrics")]
    pub telemetry_path: String,

    /// The URL of the Sensision endpoint for Warp10.
    #[arg(long = "warp10.url", default_value = "http://localhost:8082/metrics")]
    pub warp10_url: String,
}
