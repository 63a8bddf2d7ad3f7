//! Static metric vocabulary shared by every scrape cycle.
//!
//! The registry is the closed set of Sensision metrics this exporter knows
//! how to re-emit. It is built exactly once at startup from the generated
//! table in [`crate::sensision`] and never mutated afterwards: scrape cycles
//! share it read-only (behind an `Arc`), so lookups need no synchronization.
//!
//! A name that is absent from the registry means "this metric is not
//! exported". It is not an error; unknown upstream lines are simply skipped.

use std::collections::HashMap;

use crate::sensision;

/// Declared shape of one exported metric.
///
/// `name` is the canonical lookup key (Sensision class name with `.`
/// normalized to `_`) and doubles as the Prometheus metric name. `labels`
/// is the positional order label values are emitted in; it may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDescriptor {
    pub name: &'static str,
    pub help: &'static str,
    pub labels: &'static [&'static str],
}

/// Immutable mapping from canonical metric name to its [`MetricDescriptor`].
#[derive(Debug)]
pub struct MetricRegistry {
    descriptors: HashMap<&'static str, MetricDescriptor>,
}

impl MetricRegistry {
    /// Builds the registry from the generated Sensision table.
    pub fn sensision() -> Self {
        Self::from_table(sensision::METRICS)
    }

    /// Builds a registry from an arbitrary descriptor table.
    ///
    /// Keys are unique by construction of the generator; a duplicate entry
    /// would simply overwrite the previous one.
    pub(crate) fn from_table(
        table: &'static [(&'static str, &'static str, &'static [&'static str])],
    ) -> Self {
        let descriptors = table
            .iter()
            .map(|&(name, help, labels)| (name, MetricDescriptor { name, help, labels }))
            .collect();
        MetricRegistry { descriptors }
    }

    /// Looks up a descriptor by its canonical name.
    ///
    /// `None` means the metric is not part of the exported vocabulary.
    pub fn lookup(&self, canonical_name: &str) -> Option<&MetricDescriptor> {
        self.descriptors.get(canonical_name)
    }

    /// Enumerates every known descriptor, independent of any scrape.
    pub fn descriptors(&self) -> impl Iterator<Item = &MetricDescriptor> {
        self.descriptors.values()
    }

    /// Number of known metrics.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
