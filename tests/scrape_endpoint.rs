use std::sync::atomic::Ordering;
use std::time::Duration;

mod common;

/// A realistic Sensision payload: known metrics with and without labels,
/// an unknown class, and plain noise.
static UPSTREAM_BODY: &str = "\
1724931000000000//warp1 warpscript.run.count{path=test%2Fscript.mc2} 42
1724931000000000//warp1 continuum.ingress.update.gzipped{producer=x,app=y} 42.5
1724931000000000//warp1 continuum.directory.gts{} 1234
1724931000000000//warp1 some.unknown.metric{foo=bar} 1
# garbage line
not a sensision line
";

#[tokio::test]
async fn end_to_end_scrape_decodes_known_lines() {
    // ---
    let upstream = common::spawn_upstream(UPSTREAM_BODY).await;
    let server = common::TestServer::spawn(&format!("http://{upstream}/metrics")).await;

    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let body = res.text().await.unwrap();

    // Labeled gauge, with the percent-escaped label value decoded.
    assert!(body.contains("# TYPE warpscript_run_count gauge"), "{body}");
    assert!(
        body.contains(r#"warpscript_run_count{path="test/script.mc2"} 42"#),
        "{body}"
    );

    // Two labels, placed by descriptor order regardless of encoder ordering.
    assert!(body.contains("# TYPE continuum_ingress_update_gzipped gauge"));
    assert!(body.contains(r#"producer="x""#));
    assert!(body.contains(r#"app="y""#));
    assert!(body.contains("} 42.5"));

    // Label-less gauge.
    assert!(body.contains("continuum_directory_gts 1234"), "{body}");

    // Unknown classes and noise never make it to the output.
    assert!(!body.contains("some_unknown_metric"));
    assert!(!body.contains("garbage"));
}

#[tokio::test]
async fn unknown_only_payload_yields_empty_response() {
    // ---
    let upstream = common::spawn_upstream("1//h nothing.known{a=b} 1\njunk\n").await;
    let server = common::TestServer::spawn(&format!("http://{upstream}/metrics")).await;

    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    assert!(res.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_upstream_yields_empty_scrape_not_an_error() {
    // ---
    let port = common::unused_port().await;
    let server = common::TestServer::spawn(&format!("http://127.0.0.1:{port}/metrics")).await;

    // Connection refused upstream: the endpoint still answers 200 with an
    // empty, well-formed body.
    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    assert!(res.text().await.unwrap().is_empty());

    // A later independent scrape is unaffected by the prior failure.
    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    assert!(res.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn scrape_recovers_once_upstream_is_reachable() {
    // ---
    // Two servers, same process: one pointed at a dead port, one at a live
    // upstream. The failing one never poisons the working one.
    let port = common::unused_port().await;
    let broken = common::TestServer::spawn(&format!("http://127.0.0.1:{port}/metrics")).await;

    let upstream = common::spawn_upstream(UPSTREAM_BODY).await;
    let working = common::TestServer::spawn(&format!("http://{upstream}/metrics")).await;

    let res = broken
        .client
        .get(broken.url("/metrics"))
        .send()
        .await
        .unwrap();
    assert!(res.text().await.unwrap().is_empty());

    let res = working
        .client
        .get(working.url("/metrics"))
        .send()
        .await
        .unwrap();
    assert!(res.text().await.unwrap().contains("warpscript_run_count"));
}

#[tokio::test]
async fn concurrent_scrapes_serialize_on_the_upstream() {
    // ---
    let load = common::spawn_slow_upstream(
        "1//h continuum.directory.gts{} 1\n",
        Duration::from_millis(100),
    )
    .await;
    let server = std::sync::Arc::new(
        common::TestServer::spawn(&format!("http://{}/metrics", load.addr)).await,
    );

    let requests = (0..4).map(|_| {
        let server = std::sync::Arc::clone(&server);
        async move { server.client.get(server.url("/metrics")).send().await }
    });

    let responses = futures::future::join_all(requests).await;
    for response in responses {
        assert!(response.unwrap().status().is_success());
    }

    // Every request ran its own independent fetch-decode cycle...
    assert_eq!(load.hits.load(Ordering::SeqCst), 4);
    // ...but never more than one cycle hit the upstream at a time.
    assert_eq!(load.max_in_flight.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn metrics_content_type_is_correct() {
    // ---
    let upstream = common::spawn_upstream(UPSTREAM_BODY).await;
    let server = common::TestServer::spawn(&format!("http://{upstream}/metrics")).await;

    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let content_type = res
        .headers()
        .get("content-type")
        .expect("metrics response carries a content type")
        .to_str()
        .unwrap();
    assert!(
        content_type.starts_with("text/plain"),
        "unexpected content type: {content_type}"
    );
}

#[tokio::test]
async fn landing_page_links_to_the_telemetry_path() {
    // ---
    let upstream = common::spawn_upstream(UPSTREAM_BODY).await;
    let server = common::TestServer::spawn(&format!("http://{upstream}/metrics")).await;

    let res = server.client.get(server.url("/")).send().await.unwrap();
    assert!(res.status().is_success());

    let body = res.text().await.unwrap();
    assert!(body.contains("Warp10 Sensision Exporter"));
    assert!(body.contains("href='/metrics'"));
}
