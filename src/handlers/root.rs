use axum::{extract::State, response::Html};

use crate::app_state::AppState;

/// Landing page naming the exporter and linking to the telemetry path.
pub async fn root_handler(State(app_state): State<AppState>) -> Html<String> {
    let version = env!("CARGO_PKG_VERSION");
    let telemetry_path = app_state.telemetry_path();
    Html(format!(
        r#"<html>
<head><title>Warp10 Sensision Exporter</title></head>
<body>
<h1>Warp10 Sensision Exporter</h1>
<p>Version: {version}</p>
<p><a href='{telemetry_path}'>Metrics</a></p>
</body>
</html>"#
    ))
}
