//! Scrape orchestration.
//!
//! Every collector implements [`prometheus::core::Collector`] and performs one
//! stateless pull-translate-emit pass per `collect()` call:
//! - [`MBeansExporter`]: core discovery plus per-core mbeans statistics
//! - [`MetricsCollector`]: the aggregate `/admin/metrics` registry
//! - [`JvmCollector`]: the `solr.jvm` registry as flat gauges
//! - [`PingCollector`]: per-core ping handler health
//!
//! All HTTP goes through the [`Transport`] trait, so tests run against
//! [`mock::MockTransport`] instead of a live server.

mod discovery;
mod exporter;
#[cfg(feature = "http")]
mod http;
mod jvm;
mod mbeans;
mod metrics;
pub mod mock;
mod ping;
mod traits;

pub use discovery::{DiscoveredCore, discover_cores};
pub use exporter::MBeansExporter;
#[cfg(feature = "http")]
pub use http::HttpTransport;
pub use jvm::JvmCollector;
pub use mbeans::{Category, Extraction, ExtractError, HandlerSample, extract_mbeans};
pub use metrics::MetricsCollector;
pub use ping::PingCollector;
pub use traits::{FetchError, Transport};

use std::sync::{Mutex, MutexGuard};

/// Core list with index statistics.
pub const ADMIN_CORES_PATH: &str = "/admin/cores?action=STATUS&wt=json";
/// Per-core statistics, appended to `<base>/<core>`.
pub const MBEANS_PATH: &str =
    "/admin/mbeans?stats=true&wt=json&cat=CORE&cat=QUERYHANDLER&cat=UPDATEHANDLER&cat=CACHE";
/// JVM registry.
pub const JVM_PATH: &str = "/admin/metrics?group=jvm&wt=json";
/// Every registry.
pub const METRICS_PATH: &str = "/admin/metrics?group=all&type=all&prefix=&property=";
/// Ping handler, appended to `<base>/<core>`.
pub const PING_PATH: &str = "/admin/ping?wt=json";

/// Error that terminates a collection pass.
#[derive(Debug)]
pub enum CollectError {
    /// Transport failure or non-2xx status.
    Fetch(FetchError),
    /// Response body did not have the expected shape.
    Decode { what: &'static str, message: String },
    /// Value rejected by the metrics library (label schema mismatch).
    Metric(prometheus::Error),
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Fetch(e) => write!(f, "{}", e),
            CollectError::Decode { what, message } => {
                write!(f, "failed to decode {}: {}", what, message)
            }
            CollectError::Metric(e) => write!(f, "metric error: {}", e),
        }
    }
}

impl std::error::Error for CollectError {}

impl From<FetchError> for CollectError {
    fn from(e: FetchError) -> Self {
        CollectError::Fetch(e)
    }
}

impl From<prometheus::Error> for CollectError {
    fn from(e: prometheus::Error) -> Self {
        CollectError::Metric(e)
    }
}

/// Takes the per-collector cycle lock.
///
/// A panic in an earlier pass leaves no state behind that matters, since
/// every pass starts with a reset, so a poisoned lock is simply reclaimed.
pub(crate) fn lock_cycle(lock: &Mutex<()>) -> MutexGuard<'_, ()> {
    lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// First bytes of a payload, for log context.
pub(crate) fn excerpt(body: &[u8]) -> String {
    const MAX: usize = 256;
    let text = String::from_utf8_lossy(body);
    match text.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_truncates() {
        let body = "x".repeat(300);
        let out = excerpt(body.as_bytes());
        assert_eq!(out.len(), 259);
        assert!(out.ends_with("..."));
        assert_eq!(excerpt(b"{}"), "{}");
    }

    #[test]
    fn test_collect_error_display() {
        let e = CollectError::Decode {
            what: "core status",
            message: "expected value".into(),
        };
        assert_eq!(e.to_string(), "failed to decode core status: expected value");
        let e: CollectError = FetchError::Status {
            url: "http://h/solr".into(),
            status: 500,
        }
        .into();
        assert_eq!(e.to_string(), "HTTP status 500 from http://h/solr");
    }
}
