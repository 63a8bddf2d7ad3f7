//! Shared application state passed to all Axum handlers.
//!
//! The state is built once at startup and never mutated: the exporter
//! (which carries the immutable metric registry) is wrapped in an `Arc`,
//! so cloning the state per request is cheap.

use std::sync::Arc;

use crate::exporter::Exporter;

#[derive(Clone)]
pub(crate) struct AppState {
    exporter: Arc<Exporter>,

    /// Path the metrics endpoint is mounted under; the landing page links
    /// to it.
    telemetry_path: String,
}

impl AppState {
    // ---

    pub fn new(exporter: Arc<Exporter>, telemetry_path: String) -> Self {
        AppState {
            exporter,
            telemetry_path,
        }
    }

    pub(crate) fn exporter(&self) -> &Exporter {
        // ---
        &self.exporter
    }

    pub(crate) fn telemetry_path(&self) -> &str {
        // ---
        &self.telemetry_path
    }
}
