//! Sensision line decoding.
//!
//! One Sensision exposition line looks like
//!
//! ```text
//! 1724931000000000//host1 warpscript.run.count{path=test%2Fscript.mc2} 42
//! ```
//!
//! i.e. a numeric timestamp prefix with two slash-separated (and ignored)
//! segments, whitespace, the dotted class name, a brace-enclosed label list
//! and the value. [`decode`] turns one such line into a [`Sample`] when the
//! class is part of the registry vocabulary, and into `None` for everything
//! else. Decoding is tolerant by design: malformed or unrelated lines are
//! upstream noise, silently skipped rather than reported as errors.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::registry::{MetricDescriptor, MetricRegistry};

// The label-list atom `[^{]+` / `\{[^}]*\}` keeps the class-name segment
// non-greedy and bounds the list at the first closing brace, while the
// trailing `(.*)` is greedy. A label list appears at most once per line, so
// a value containing `}` can never be mis-split. These boundaries are part
// of the decoding contract, keep them in sync with the tests below.
static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)/[^/]*/[^/]*[ \t]+([^{]+)\{([^}]*)\}[ \t](.*)$")
        .expect("sensision line pattern is valid")
});

/// One fully decoded, ready-to-emit metric observation.
///
/// `label_values` always has the same length and order as
/// `descriptor.labels`; positions the line did not fill hold the empty
/// string. Samples are transient and owned by the scrape cycle that
/// produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub descriptor: MetricDescriptor,
    pub label_values: Vec<String>,
    pub value: f64,
}

/// Decodes one Sensision line against the registry vocabulary.
///
/// Returns `None` for anything that is not a well-formed line carrying a
/// known metric with a parseable value. A label key that is present on the
/// line but not declared by the descriptor is dropped with an info-level
/// diagnostic; a declared label the line omits defaults to the empty
/// string. Duplicate keys resolve to the last occurrence.
pub fn decode(line: &str, registry: &MetricRegistry) -> Option<Sample> {
    let captures = LINE_PATTERN.captures(line)?;

    let class_name = captures.get(2)?.as_str();
    let canonical = class_name.replace('.', "_");
    let descriptor = *registry.lookup(&canonical)?;

    let value: f64 = captures.get(4)?.as_str().parse().ok()?;

    let mut label_values = vec![String::new(); descriptor.labels.len()];
    if !descriptor.labels.is_empty() {
        for pair in captures.get(3)?.as_str().split(',') {
            // Exactly one `=` per pair; anything else is noise.
            let fields: Vec<&str> = pair.split('=').collect();
            if fields.len() != 2 {
                continue;
            }
            let decoded = query_unescape(fields[1]).unwrap_or_default();
            match descriptor.labels.iter().position(|name| *name == fields[0]) {
                Some(position) => label_values[position] = decoded,
                None => tracing::info!(
                    label = fields[0],
                    metric = class_name,
                    "label not declared for metric, dropping"
                ),
            }
        }
    }

    Some(Sample {
        descriptor,
        label_values,
        value,
    })
}

/// URL-query unescaping as Sensision applies it to label values: `+`
/// becomes a space and `%XX` escapes are decoded. Returns `None` for a
/// truncated or non-hex escape, or when the decoded bytes are not UTF-8.
fn query_unescape(escaped: &str) -> Option<String> {
    let bytes = escaped.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b'%' => {
                if i + 2 >= bytes.len() {
                    return None;
                }
                let hi = hex_value(bytes[i + 1])?;
                let lo = hex_value(bytes[i + 2])?;
                decoded.push(hi << 4 | lo);
                i += 3;
            }
            other => {
                decoded.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8(decoded).ok()
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
