use axum::{extract::State, http::StatusCode, response::IntoResponse};
use prometheus::{Encoder, TextEncoder};

use crate::app_state::AppState;

/// Handler for the telemetry endpoint.
///
/// Runs one scrape cycle against the Sensision endpoint and returns the
/// decoded samples in Prometheus text format. An upstream failure has
/// already been absorbed by the exporter, so this always answers `200`
/// with a well-formed (possibly empty) body, never a 5xx.
pub async fn metrics_handler(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, StatusCode> {
    // ---

    let families = app_state.exporter().scrape().await;

    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&families, &mut buffer) {
        tracing::error!(error = %err, "failed to encode metric families");
        buffer.clear();
    }

    Ok((
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        buffer,
    ))
}
