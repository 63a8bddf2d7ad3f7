// Test helpers are intentionally partially used
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use reqwest::Client;
use tokio::net::TcpListener;
use warp10_sensision_exporter::{create_router, Config};

// ============================================================================
// Exporter under test
// ============================================================================

pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestServer {
    // ---

    /// Spawns the exporter on an ephemeral port, scraping `warp10_url`.
    pub async fn spawn(warp10_url: &str) -> Self {
        // ---
        let config = Config {
            listen_address: "127.0.0.1:0".to_string(),
            telemetry_path: "/metrics".to_string(),
            warp10_url: warp10_url.to_string(),
        };

        let app = create_router(&config).expect("should be able to create router");
        let addr = serve(app).await;

        TestServer {
            addr,
            client: Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }
}

// ============================================================================
// Stub Sensision upstreams
// ============================================================================

/// Spawns a stub Sensision endpoint serving `body` at `/metrics`.
pub async fn spawn_upstream(body: &'static str) -> SocketAddr {
    // ---
    let app = Router::new().route("/metrics", get(move || async move { body }));
    serve(app).await
}

/// Handles on the slow upstream's request accounting.
pub struct UpstreamLoad {
    pub addr: SocketAddr,
    pub hits: Arc<AtomicUsize>,
    pub max_in_flight: Arc<AtomicUsize>,
}

/// Spawns a stub upstream that takes `delay` to answer and records how many
/// requests it ever served concurrently.
pub async fn spawn_slow_upstream(body: &'static str, delay: Duration) -> UpstreamLoad {
    // ---
    let hits = Arc::new(AtomicUsize::new(0));
    let in_flight = Arc::new(AtomicUsize::new(0));
    let max_in_flight = Arc::new(AtomicUsize::new(0));

    let handler = {
        let hits = Arc::clone(&hits);
        let in_flight = Arc::clone(&in_flight);
        let max_in_flight = Arc::clone(&max_in_flight);

        move || {
            let hits = Arc::clone(&hits);
            let in_flight = Arc::clone(&in_flight);
            let max_in_flight = Arc::clone(&max_in_flight);

            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                max_in_flight.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(delay).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
                body
            }
        }
    };

    let addr = serve(Router::new().route("/metrics", get(handler))).await;

    UpstreamLoad {
        addr,
        hits,
        max_in_flight,
    }
}

/// Reserves a port nothing is listening on, for connection-refused tests.
pub async fn unused_port() -> u16 {
    // ---
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn serve(app: Router) -> SocketAddr {
    // ---
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}
