//! Scrape coordination: one upstream fetch-and-decode cycle per request.
//!
//! The [`Exporter`] owns the upstream URL, a reused HTTP client and the
//! shared metric registry. Each call to [`Exporter::scrape`] performs one
//! full cycle: GET the Sensision endpoint, run every body line through
//! [`crate::decode::decode`] and forward each resulting sample into a
//! per-cycle Prometheus registry as it is produced. A failed fetch yields
//! an empty cycle; it is logged, never propagated, and does not affect
//! later scrapes.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use prometheus::{proto, GaugeVec, Opts, Registry};
use reqwest::{Client, Url};
use tokio::sync::Mutex;

use crate::decode::{decode, Sample};
use crate::registry::{MetricDescriptor, MetricRegistry};

/// Prometheus exporter for a Warp10 Sensision endpoint.
pub struct Exporter {
    url: Url,
    client: Client,
    registry: Arc<MetricRegistry>,
    /// Deliberate serialization point: exactly one fetch-and-decode cycle
    /// runs at a time. A concurrent scrape waits here, then performs its
    /// own independent cycle; results are never shared between requests.
    scrape_lock: Mutex<()>,
}

impl Exporter {
    /// Creates the exporter, validating the Sensision URL eagerly.
    ///
    /// # Errors
    /// A malformed URL is a startup error: no exporter is created.
    pub fn new(sensision_url: &str, registry: Arc<MetricRegistry>) -> Result<Self> {
        let url = Url::parse(sensision_url)
            .with_context(|| format!("invalid Sensision URL: {sensision_url}"))?;

        Ok(Exporter {
            url,
            client: Client::new(),
            registry,
            scrape_lock: Mutex::new(()),
        })
    }

    /// Enumerates every metric this exporter can ever emit, independent of
    /// any scrape having occurred.
    pub fn describe(&self) -> impl Iterator<Item = &MetricDescriptor> {
        self.registry.descriptors()
    }

    /// Runs one scrape cycle and returns the resulting metric families.
    ///
    /// The worst outcome of an upstream or transport failure is an empty
    /// family set for this cycle, logged once at error level. The response
    /// status is not inspected; per-line decoding absorbs whatever the body
    /// contains.
    pub async fn scrape(&self) -> Vec<proto::MetricFamily> {
        let _cycle = self.scrape_lock.lock().await;

        let response = match self.client.get(self.url.clone()).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(error = %err, "error getting metrics from sensision");
                return Vec::new();
            }
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                tracing::error!(error = %err, "error reading sensision response body");
                return Vec::new();
            }
        };

        let mut sink = SampleSink::new();
        for line in body.lines() {
            if let Some(sample) = decode(line, &self.registry) {
                sink.push(sample);
            }
        }
        sink.into_families()
    }
}

/// Per-cycle Prometheus registry that samples are forwarded into as they
/// are decoded. One `GaugeVec` is created per touched descriptor, on its
/// first sample; untouched descriptors produce no family.
struct SampleSink {
    registry: Registry,
    gauges: HashMap<&'static str, GaugeVec>,
}

impl SampleSink {
    fn new() -> Self {
        SampleSink {
            registry: Registry::new(),
            gauges: HashMap::new(),
        }
    }

    fn push(&mut self, sample: Sample) {
        let gauge = match self.gauges.entry(sample.descriptor.name) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let opts = Opts::new(sample.descriptor.name, sample.descriptor.help);
                let gauge = match GaugeVec::new(opts, sample.descriptor.labels) {
                    Ok(gauge) => gauge,
                    Err(err) => {
                        tracing::error!(
                            metric = sample.descriptor.name,
                            error = %err,
                            "cannot build gauge for metric"
                        );
                        return;
                    }
                };
                if let Err(err) = self.registry.register(Box::new(gauge.clone())) {
                    tracing::error!(
                        metric = sample.descriptor.name,
                        error = %err,
                        "cannot register gauge for metric"
                    );
                    return;
                }
                entry.insert(gauge)
            }
        };

        // Cardinality always matches: decode fills one value per declared
        // label, so with_label_values cannot fail here.
        let values: Vec<&str> = sample.label_values.iter().map(String::as_str).collect();
        gauge.with_label_values(&values).set(sample.value);
    }

    fn into_families(self) -> Vec<proto::MetricFamily> {
        self.registry.gather()
    }
}
