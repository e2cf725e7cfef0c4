//! solr-exporter-core: Solr statistics translated into Prometheus metrics.
//!
//! Provides:
//! - `config`: exporter configuration and core exclusion filter
//! - `schema`: typed shapes of the Solr admin JSON payloads
//! - `normalize`: field reconciliation across Solr versions
//! - `emit`: static metric descriptor tables and gauge families
//! - `collector`: scrape orchestration (mbeans, metrics, JVM, ping)

pub mod collector;
pub mod config;
pub mod emit;
pub mod normalize;
pub mod schema;

pub use collector::{
    CollectError, FetchError, JvmCollector, MBeansExporter, MetricsCollector, PingCollector,
    Transport,
};
#[cfg(feature = "http")]
pub use collector::HttpTransport;
pub use config::{CoreFilter, ExporterConfig};

/// Crate version reported by the binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Metric namespace prefix.
pub const NAMESPACE: &str = "solr";
