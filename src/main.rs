use clap::Parser;
use tracing::{error, info};
use warp10_sensision_exporter::{run, Config};

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber to log to stdout
    tracing_subscriber::fmt::init();

    let config = Config::parse();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "starting warp10_sensision_exporter"
    );

    if let Err(err) = run(config).await {
        error!(error = %err, "exporter failed");
        std::process::exit(1);
    }
}
