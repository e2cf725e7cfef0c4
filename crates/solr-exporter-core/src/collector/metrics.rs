//! Aggregate `/admin/metrics` collector.
//!
//! The registry tree is dynamic (keys embed handler, pool and cache names),
//! so it is walked as a [`serde_json::Value`] and each key is matched by
//! prefix and suffix rules. Time fields reported in milliseconds are
//! converted to seconds here.

use std::sync::{Arc, Mutex};

use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::traits::Transport;
use super::{CollectError, METRICS_PATH, excerpt, lock_cycle};
use crate::config::ExporterConfig;
use crate::emit::{AGGREGATE_METRICS, FamilySet};
use crate::normalize::{ms_to_seconds, parse_replication_timestamp};

type Entries = Map<String, Value>;

const JETTY_HANDLER: &str = "org.eclipse.jetty.server.handler.DefaultHandler";
const CORE_REGISTRY_PREFIX: &str = "solr.core.";

const SEARCHER_CACHES: [&str; 5] = [
    "documentCache",
    "fieldValueCache",
    "filterCache",
    "perSegFilter",
    "queryResultCache",
];
const CACHE_GAUGES: [&str; 5] = ["lookups", "hits", "size", "evictions", "inserts"];
const CACHE_CUMULATIVE: [&str; 4] = [
    "cumulative_lookups",
    "cumulative_hits",
    "cumulative_evictions",
    "cumulative_inserts",
];

/// `UPDATE.updateHandler.<key>` to metric. `true` when the value is a `{count}` meter.
const UPDATE_HANDLER_KEYS: [(&str, &str, bool); 17] = [
    ("adds", "solr_metrics_core_update_handler_adds", false),
    ("autoCommits", "solr_metrics_core_update_handler_auto_commits_total", false),
    ("commits", "solr_metrics_core_update_handler_commits_total", true),
    ("cumulativeAdds", "solr_metrics_core_update_handler_adds_total", true),
    ("cumulativeDeletesById", "solr_metrics_core_update_handler_deletes_by_id_total", true),
    ("cumulativeDeletesByQuery", "solr_metrics_core_update_handler_deletes_by_query_total", true),
    ("cumulativeErrors", "solr_metrics_core_update_handler_errors_total", true),
    ("deletesById", "solr_metrics_core_update_handler_deletes_by_id", false),
    ("deletesByQuery", "solr_metrics_core_update_handler_deletes_by_query", false),
    ("docsPending", "solr_metrics_core_update_handler_pending_docs", false),
    ("errors", "solr_metrics_core_update_handler_errors", false),
    ("expungeDeletes", "solr_metrics_core_update_handler_expunge_deletes_total", true),
    ("merges", "solr_metrics_core_update_handler_merges_total", true),
    ("optimizes", "solr_metrics_core_update_handler_optimizes_total", true),
    ("rollbacks", "solr_metrics_core_update_handler_rollbacks_total", true),
    ("softAutoCommits", "solr_metrics_core_update_handler_soft_auto_commits_total", false),
    ("splits", "solr_metrics_core_update_handler_splits_total", true),
];

/// Numeric reading of a JSON value: numbers, numeric text and booleans.
/// Anything else reads as zero.
fn number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => 0.0,
    }
}

fn field(value: &Value, name: &str) -> f64 {
    value.get(name).map(number).unwrap_or(0.0)
}

fn segment<'a>(parts: &[&'a str], idx: usize) -> &'a str {
    parts.get(idx).copied().unwrap_or("")
}

/// Core labels taken from a `solr.core.*` registry name.
///
/// SolrCloud registries are `solr.core.<collection>.<shard>.<replica>`; the
/// core is then named `<collection>_<shard>_<replica>` as Solr names it.
#[derive(Debug, Clone, PartialEq)]
struct CoreIdentity {
    core: String,
    collection: String,
    shard: String,
    replica: String,
}

impl CoreIdentity {
    fn from_registry(suffix: &str) -> Self {
        let parts: Vec<&str> = suffix.split('.').collect();
        match parts.as_slice() {
            [collection, shard, replica] => Self {
                core: parts.join("_"),
                collection: collection.to_string(),
                shard: shard.to_string(),
                replica: replica.to_string(),
            },
            _ => Self {
                core: suffix.to_string(),
                collection: String::new(),
                shard: String::new(),
                replica: String::new(),
            },
        }
    }
}

/// Exports the `solr_metrics_*` families.
///
/// A pass that fails (transport, undecodable body, broken jetty meter)
/// emits nothing from this collector.
pub struct MetricsCollector {
    config: ExporterConfig,
    transport: Arc<dyn Transport>,
    cycle: Mutex<()>,
    families: FamilySet,
}

impl MetricsCollector {
    pub fn new(config: ExporterConfig, transport: Arc<dyn Transport>) -> prometheus::Result<Self> {
        Ok(Self {
            config,
            transport,
            cycle: Mutex::new(()),
            families: FamilySet::new(&AGGREGATE_METRICS)?,
        })
    }

    fn set(&self, name: &str, labels: &[&str], value: f64) -> Result<(), CollectError> {
        self.families.set(name, labels, value)?;
        Ok(())
    }

    fn update(&self) -> Result<(), CollectError> {
        let url = format!("{}{}", self.config.base_url, METRICS_PATH);
        let body = self.transport.get(&url)?;
        let document: Value = serde_json::from_slice(&body).map_err(|e| {
            warn!(payload = %excerpt(&body), "unexpected metrics payload");
            CollectError::Decode {
                what: "aggregate metrics",
                message: e.to_string(),
            }
        })?;
        let registries = document
            .get("metrics")
            .and_then(Value::as_object)
            .ok_or_else(|| CollectError::Decode {
                what: "aggregate metrics",
                message: "no metrics object".to_string(),
            })?;

        for (name, registry) in registries {
            let Some(entries) = registry.as_object() else {
                continue;
            };
            if name.starts_with("solr") && name.ends_with("jetty") {
                self.jetty(entries)?;
            } else if name.starts_with("solr.jvm") {
                self.jvm(entries)?;
            } else if name.starts_with("solr.node") {
                self.node(entries)?;
            } else if let Some(suffix) = name.strip_prefix(CORE_REGISTRY_PREFIX) {
                let identity = CoreIdentity::from_registry(suffix);
                if self.config.core_filter.is_excluded(&identity.core) {
                    debug!(core = %identity.core, "core excluded");
                    continue;
                }
                for (key, value) in entries {
                    self.core_entry(&identity, key, value)?;
                }
            }
        }
        Ok(())
    }

    fn jetty(&self, entries: &Entries) -> Result<(), CollectError> {
        let missing_count = |key: &str| CollectError::Decode {
            what: "jetty metrics",
            message: format!("no count in {}", key),
        };
        for (key, value) in entries {
            if !key.starts_with(JETTY_HANDLER) {
                continue;
            }
            let last = key.rsplit('.').next().unwrap_or("");
            let prefix = last.split('-').next().unwrap_or("");
            if key.ends_with("xx-responses") {
                let count = value.get("count").ok_or_else(|| missing_count(key))?;
                self.set("solr_metrics_jetty_response_total", &[prefix], number(count))?;
            }
            if key.ends_with("-requests") {
                if let Some(count) = value.get("count") {
                    self.set("solr_metrics_jetty_requests_total", &[prefix], number(count))?;
                }
            }
            if key.starts_with(&format!("{}.dispatches", JETTY_HANDLER)) {
                let count = value.get("count").ok_or_else(|| missing_count(key))?;
                self.set("solr_metrics_jetty_dispatches_total", &[], number(count))?;
            }
        }
        Ok(())
    }

    fn jvm(&self, entries: &Entries) -> Result<(), CollectError> {
        for (key, value) in entries {
            let parts: Vec<&str> = key.split('.').collect();
            let last = segment(&parts, parts.len().saturating_sub(1));
            let v = number(value);
            if key.starts_with("buffers.") {
                if key.ends_with(".Count") {
                    self.set("solr_metrics_jvm_buffers", &[segment(&parts, 1)], v)?;
                }
                if key.ends_with(".MemoryUsed") || key.ends_with(".TotalCapacity") {
                    self.set("solr_metrics_jvm_buffers_bytes", &[segment(&parts, 1), last], v)?;
                }
            }
            if key.starts_with("gc.") {
                if key.ends_with(".count") {
                    self.set("solr_metrics_jvm_gc_total", &[segment(&parts, 1)], v)?;
                }
                if key.ends_with(".time") {
                    self.set(
                        "solr_metrics_jvm_gc_seconds_total",
                        &[segment(&parts, 1)],
                        ms_to_seconds(v),
                    )?;
                }
            }
            if !key.ends_with(".usage") {
                if key.starts_with("memory.heap.") {
                    self.set("solr_metrics_jvm_memory_heap_bytes", &[last], v)?;
                }
                if key.starts_with("memory.non-heap.") {
                    self.set("solr_metrics_jvm_memory_non_heap_bytes", &[last], v)?;
                }
                if key.starts_with("memory.pools.") {
                    self.set(
                        "solr_metrics_jvm_memory_pools_bytes",
                        &[segment(&parts, 2), last],
                        v,
                    )?;
                }
            }
            if key.starts_with("memory.total.") {
                self.set("solr_metrics_jvm_memory_bytes", &[last], v)?;
            }
            match key.as_str() {
                "os.committedVirtualMemorySize"
                | "os.freePhysicalMemorySize"
                | "os.freeSwapSpaceSize"
                | "os.totalPhysicalMemorySize"
                | "os.totalSwapSpaceSize" => {
                    self.set("solr_metrics_jvm_os_memory_bytes", &[last], v)?
                }
                "os.maxFileDescriptorCount" | "os.openFileDescriptorCount" => {
                    self.set("solr_metrics_jvm_os_file_descriptors", &[last], v)?
                }
                "os.processCpuLoad" | "os.systemCpuLoad" => {
                    self.set("solr_metrics_jvm_os_cpu_load", &[last], v)?
                }
                "os.processCpuTime" => {
                    self.set("solr_metrics_jvm_os_cpu_time_seconds", &[last], ms_to_seconds(v))?
                }
                "os.systemLoadAverage" => {
                    self.set("solr_metrics_jvm_os_load_average", &[last], v)?
                }
                _ => {}
            }
            if key.starts_with("threads.") && key.ends_with(".count") {
                self.set("solr_metrics_jvm_threads", &[segment(&parts, 1)], v)?;
            }
        }
        Ok(())
    }

    fn node(&self, entries: &Entries) -> Result<(), CollectError> {
        for (key, value) in entries {
            let parts: Vec<&str> = key.split('.').collect();
            if parts.len() < 2 {
                continue;
            }
            let (category, handler) = (parts[0], parts[1]);
            let labels = [category, handler];

            for (suffix, metric) in [
                (".clientErrors", "solr_metrics_node_client_errors_total"),
                (".errors", "solr_metrics_node_errors_total"),
                (".serverErrors", "solr_metrics_node_server_errors_total"),
                (".timeouts", "solr_metrics_node_timeouts_total"),
                (".requestTimes", "solr_metrics_node_requests_total"),
            ] {
                if key.ends_with(suffix) {
                    self.set(metric, &labels, field(value, "count"))?;
                }
            }
            if key.ends_with(".totalTime") {
                self.set(
                    "solr_metrics_node_time_seconds_total",
                    &labels,
                    ms_to_seconds(number(value)),
                )?;
            }
            if key.starts_with("CONTAINER.cores.") {
                self.set("solr_metrics_node_cores", &[category, segment(&parts, 2)], number(value))?;
            }
            if key.starts_with("CONTAINER.fs.coreRoot.")
                && (key.ends_with(".totalSpace") || key.ends_with(".usableSpace"))
            {
                self.set(
                    "solr_metrics_node_core_root_fs_bytes",
                    &[category, segment(&parts, 3)],
                    number(value),
                )?;
            }
            if key.contains(".threadPool.") {
                // `<cat>.threadPool.<executor>.<x>` or `<cat>.<handler>.threadPool.<executor>.<x>`
                let (pool_handler, executor) = if parts.len() >= 5 {
                    (handler, parts[3])
                } else {
                    ("", segment(&parts, 2))
                };
                for (suffix, metric) in [
                    (".completed", "solr_metrics_node_thread_pool_completed_total"),
                    (".running", "solr_metrics_node_thread_pool_running"),
                    (".submitted", "solr_metrics_node_thread_pool_submitted_total"),
                ] {
                    if key.ends_with(suffix) {
                        self.set(metric, &[category, pool_handler, executor], number(value))?;
                    }
                }
            }
            if key.ends_with("Connections") {
                self.set(
                    "solr_metrics_node_connections",
                    &[category, handler, segment(&parts, 2)],
                    number(value),
                )?;
            }
        }
        Ok(())
    }

    fn core_entry(&self, id: &CoreIdentity, key: &str, value: &Value) -> Result<(), CollectError> {
        let parts: Vec<&str> = key.split('.').collect();
        if parts.len() < 2 {
            return Ok(());
        }
        let (category, handler) = (parts[0], parts[1]);
        let (core, collection, shard, replica) = (
            id.core.as_str(),
            id.collection.as_str(),
            id.shard.as_str(),
            id.replica.as_str(),
        );
        let handler_labels = [category, handler, core, collection, shard, replica];
        let core_labels = [category, core, collection, shard, replica];
        let item_labels = |item| [category, core, item, collection, shard, replica];

        // `<category>.<handler>.<stat>` only; distrib and local variants share the labels.
        if handler.starts_with('/') && parts.len() == 3 {
            if key.ends_with(".requestTimes") {
                self.set("solr_metrics_core_requests_total", &handler_labels, field(value, "count"))?;
                for (stat, metric) in [
                    ("p75_ms", "solr_metrics_core_requests_p75_ms"),
                    ("p95_ms", "solr_metrics_core_requests_p95_ms"),
                    ("p99_ms", "solr_metrics_core_requests_p99_ms"),
                    ("mean_ms", "solr_metrics_core_requests_mean_ms"),
                    ("median_ms", "solr_metrics_core_requests_median_ms"),
                    ("stddev_ms", "solr_metrics_core_requests_stddev_ms"),
                ] {
                    self.set(metric, &handler_labels, field(value, stat))?;
                }
            }
            for (suffix, metric) in [
                (".clientErrors", "solr_metrics_core_client_errors_total"),
                (".errors", "solr_metrics_core_errors_total"),
                (".serverErrors", "solr_metrics_core_server_errors_total"),
                (".timeouts", "solr_metrics_core_timeouts_total"),
            ] {
                if key.ends_with(suffix) {
                    self.set(metric, &handler_labels, field(value, "count"))?;
                }
            }
            if key.ends_with(".totalTime") {
                self.set(
                    "solr_metrics_core_time_seconds_total",
                    &handler_labels,
                    ms_to_seconds(number(value)),
                )?;
            }
        }

        if key.starts_with("CACHE.searcher") && SEARCHER_CACHES.iter().any(|c| key.ends_with(c)) {
            self.searcher_cache(id, category, segment(&parts, 2), value)?;
        }
        if key.starts_with("CORE.fs") && (key.ends_with(".totalSpace") || key.ends_with(".usableSpace")) {
            self.set("solr_metrics_core_fs_bytes", &item_labels(segment(&parts, 2)), number(value))?;
        }
        if key.starts_with("HIGHLIGHTER.") && key.ends_with(".requests") {
            self.set(
                "solr_metrics_core_highlighter_request_total",
                &[category, core, handler, segment(&parts, 2), collection, shard, replica],
                number(value),
            )?;
        }

        match key {
            "CACHE.core.fieldCache" => {
                self.set("solr_metrics_core_field_cache_total", &core_labels, field(value, "entries_count"))?;
            }
            "INDEX.sizeInBytes" => {
                self.set("solr_metrics_core_index_size_bytes", &core_labels, number(value))?;
            }
            "REPLICATION./replication.isMaster" => {
                self.set("solr_metrics_core_replication_master", &handler_labels, number(value))?;
            }
            "REPLICATION./replication.isSlave" => {
                self.set("solr_metrics_core_replication_slave", &handler_labels, number(value))?;
            }
            "REPLICATION./replication.fetcher" => {
                let timestamp = |name| parse_replication_timestamp(value.get(name).and_then(Value::as_str));
                for (metric, reading) in [
                    ("solr_metrics_core_replication_last_success", timestamp("indexReplicatedAt")),
                    ("solr_metrics_core_replication_last_fail", timestamp("replicationFailedAt")),
                    ("solr_metrics_core_replication_success_count", field(value, "timesIndexReplicated")),
                    ("solr_metrics_core_replication_fail_count", field(value, "timesFailed")),
                    ("solr_metrics_core_replication_replicating", field(value, "isReplicating")),
                    (
                        "solr_metrics_core_replication_last_cycle_downloaded_bytes",
                        field(value, "lastCycleBytesDownloaded"),
                    ),
                ] {
                    self.set(metric, &handler_labels, reading)?;
                }
            }
            "SEARCHER.searcher.deletedDocs" | "SEARCHER.searcher.maxDoc" | "SEARCHER.searcher.numDocs" => {
                self.set(
                    "solr_metrics_core_searcher_documents",
                    &item_labels(segment(&parts, 2)),
                    number(value),
                )?;
            }
            _ => {}
        }

        if let Some(stat) = key.strip_prefix("UPDATE.updateHandler.") {
            if let Some((_, metric, meter)) = UPDATE_HANDLER_KEYS.iter().find(|(k, _, _)| *k == stat) {
                let reading = if *meter { field(value, "count") } else { number(value) };
                self.set(metric, &handler_labels, reading)?;
            }
        }
        Ok(())
    }

    fn searcher_cache(
        &self,
        id: &CoreIdentity,
        category: &str,
        cache: &str,
        value: &Value,
    ) -> Result<(), CollectError> {
        let labels = |item| {
            [
                category,
                id.core.as_str(),
                cache,
                item,
                id.collection.as_str(),
                id.shard.as_str(),
                id.replica.as_str(),
            ]
        };
        self.set("solr_metrics_core_searcher_cache_ratio", &labels("hitratio"), field(value, "hitratio"))?;
        for item in CACHE_GAUGES {
            self.set("solr_metrics_core_searcher_cache", &labels(item), field(value, item))?;
        }
        self.set(
            "solr_metrics_core_searcher_warmup_time_seconds",
            &labels("warmupTime"),
            ms_to_seconds(field(value, "warmupTime")),
        )?;
        for item in CACHE_CUMULATIVE {
            self.set(
                "solr_metrics_core_searcher_cumulative_cache_total",
                &labels(item),
                field(value, item),
            )?;
        }
        self.set(
            "solr_metrics_core_searcher_cumulative_cache_ratio",
            &labels("cumulative_hitratio"),
            field(value, "cumulative_hitratio"),
        )
    }
}

impl Collector for MetricsCollector {
    fn desc(&self) -> Vec<&Desc> {
        self.families.desc()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let _guard = lock_cycle(&self.cycle);
        self.families.reset();
        if let Err(e) = self.update() {
            warn!(error = %e, "aggregate metrics collection failed");
            self.families.reset();
            return Vec::new();
        }
        self.families.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::{MockTransport, scenarios};
    use crate::config::CoreFilter;
    use prometheus::proto::Metric;
    use std::time::Duration;

    fn collector(transport: MockTransport, filter: CoreFilter) -> MetricsCollector {
        let config =
            ExporterConfig::new(scenarios::SOLR_ADDRESS, "/solr", Duration::from_secs(1), filter);
        MetricsCollector::new(config, Arc::new(transport)).unwrap()
    }

    fn full(filter: CoreFilter) -> Vec<MetricFamily> {
        collector(MockTransport::new().with_metrics(), filter).collect()
    }

    fn value_of(m: &Metric) -> f64 {
        if m.has_counter() {
            m.get_counter().get_value()
        } else {
            m.get_gauge().get_value()
        }
    }

    /// Value of the sample in `name` whose labels include every pair in `labels`.
    fn sample(families: &[MetricFamily], name: &str, labels: &[(&str, &str)]) -> Option<f64> {
        families
            .iter()
            .filter(|mf| mf.get_name() == name)
            .flat_map(|mf| mf.get_metric())
            .find(|m| {
                labels.iter().all(|(k, v)| {
                    m.get_label()
                        .iter()
                        .any(|lp| lp.get_name() == *k && lp.get_value() == *v)
                })
            })
            .map(value_of)
    }

    #[test]
    fn test_number_coercion() {
        assert_eq!(number(&serde_json::json!(3)), 3.0);
        assert_eq!(number(&serde_json::json!("2.5")), 2.5);
        assert_eq!(number(&serde_json::json!(true)), 1.0);
        assert_eq!(number(&serde_json::json!(false)), 0.0);
        assert_eq!(number(&serde_json::json!("never")), 0.0);
        assert_eq!(number(&serde_json::json!({"count": 1})), 0.0);
    }

    #[test]
    fn test_core_identity() {
        let standalone = CoreIdentity::from_registry("core0");
        assert_eq!(standalone.core, "core0");
        assert_eq!(standalone.collection, "");

        let cloud = CoreIdentity::from_registry("films.shard1.replica_n1");
        assert_eq!(cloud.core, "films_shard1_replica_n1");
        assert_eq!(cloud.collection, "films");
        assert_eq!(cloud.shard, "shard1");
        assert_eq!(cloud.replica, "replica_n1");
    }

    #[test]
    fn test_jetty() {
        let mf = full(CoreFilter::none());
        assert_eq!(sample(&mf, "solr_metrics_jetty_response_total", &[("status", "2xx")]), Some(1500.0));
        assert_eq!(sample(&mf, "solr_metrics_jetty_response_total", &[("status", "5xx")]), Some(3.0));
        assert_eq!(sample(&mf, "solr_metrics_jetty_requests_total", &[("method", "get")]), Some(1400.0));
        assert_eq!(sample(&mf, "solr_metrics_jetty_requests_total", &[("method", "post")]), Some(103.0));
        assert_eq!(sample(&mf, "solr_metrics_jetty_dispatches_total", &[]), Some(1503.0));
    }

    #[test]
    fn test_jetty_missing_count_aborts() {
        let mut transport = MockTransport::new();
        transport.add_body(
            scenarios::metrics_url(),
            r#"{"metrics":{
                "solr.jetty":{"org.eclipse.jetty.server.handler.DefaultHandler.2xx-responses":{"meanRate":1.0}},
                "solr.node":{"CONTAINER.cores.loaded":2}
            }}"#,
        );
        assert!(collector(transport, CoreFilter::none()).collect().is_empty());
    }

    #[test]
    fn test_jvm() {
        let mf = full(CoreFilter::none());
        assert_eq!(sample(&mf, "solr_metrics_jvm_gc_total", &[("item", "ParNew")]), Some(40.0));
        assert_eq!(sample(&mf, "solr_metrics_jvm_gc_seconds_total", &[("item", "ParNew")]), Some(1.2));
        assert_eq!(sample(&mf, "solr_metrics_jvm_buffers", &[("pool", "direct")]), Some(4.0));
        assert_eq!(
            sample(&mf, "solr_metrics_jvm_buffers_bytes", &[("pool", "direct"), ("item", "MemoryUsed")]),
            Some(8192.0)
        );
        assert_eq!(sample(&mf, "solr_metrics_jvm_memory_heap_bytes", &[("item", "used")]), Some(134217728.0));
        assert_eq!(sample(&mf, "solr_metrics_jvm_memory_heap_bytes", &[("item", "usage")]), None);
        assert_eq!(
            sample(&mf, "solr_metrics_jvm_memory_pools_bytes", &[("space", "Metaspace"), ("item", "used")]),
            Some(47185920.0)
        );
        assert_eq!(
            sample(&mf, "solr_metrics_jvm_os_cpu_time_seconds", &[("item", "processCpuTime")]),
            Some(35.0)
        );
        assert_eq!(
            sample(&mf, "solr_metrics_jvm_os_load_average", &[("item", "systemLoadAverage")]),
            Some(0.75)
        );
        assert_eq!(sample(&mf, "solr_metrics_jvm_threads", &[("item", "daemon")]), Some(17.0));
    }

    #[test]
    fn test_node() {
        let mf = full(CoreFilter::none());
        let cores_handler = [("category", "ADMIN"), ("handler", "/admin/cores")];
        assert_eq!(sample(&mf, "solr_metrics_node_client_errors_total", &cores_handler), Some(2.0));
        assert_eq!(sample(&mf, "solr_metrics_node_server_errors_total", &cores_handler), Some(1.0));
        assert_eq!(sample(&mf, "solr_metrics_node_requests_total", &cores_handler), Some(50.0));
        assert_eq!(sample(&mf, "solr_metrics_node_time_seconds_total", &cores_handler), Some(2.5));
        assert_eq!(sample(&mf, "solr_metrics_node_cores", &[("item", "loaded")]), Some(2.0));
        assert_eq!(
            sample(&mf, "solr_metrics_node_core_root_fs_bytes", &[("item", "usableSpace")]),
            Some(53687091200.0)
        );
        assert_eq!(
            sample(
                &mf,
                "solr_metrics_node_thread_pool_completed_total",
                &[("category", "CONTAINER"), ("handler", ""), ("executor", "coreContainerWorkExecutor")]
            ),
            Some(10.0)
        );
        assert_eq!(
            sample(
                &mf,
                "solr_metrics_node_thread_pool_completed_total",
                &[("handler", "/admin/collections"), ("executor", "parallelCoreAdminExecutor")]
            ),
            Some(4.0)
        );
        assert_eq!(
            sample(
                &mf,
                "solr_metrics_node_connections",
                &[("handler", "httpShardHandler"), ("item", "availableConnections")]
            ),
            Some(5.0)
        );
    }

    #[test]
    fn test_core_handlers() {
        let mf = full(CoreFilter::none());
        let select = [("core", "core0"), ("handler", "/select"), ("collection", "")];
        assert_eq!(sample(&mf, "solr_metrics_core_requests_total", &select), Some(42.0));
        assert_eq!(sample(&mf, "solr_metrics_core_requests_p95_ms", &select), Some(20.0));
        assert_eq!(sample(&mf, "solr_metrics_core_client_errors_total", &select), Some(1.0));
        assert_eq!(sample(&mf, "solr_metrics_core_time_seconds_total", &select), Some(0.42));
        assert_eq!(
            sample(&mf, "solr_metrics_core_requests_total", &[("handler", "select")]),
            None
        );
    }

    #[test]
    fn test_core_caches_and_index() {
        let mf = full(CoreFilter::none());
        let core0 = ("core", "core0");
        assert_eq!(sample(&mf, "solr_metrics_core_field_cache_total", &[core0]), Some(3.0));
        let filter = |item| [core0, ("type", "filterCache"), ("item", item)];
        assert_eq!(sample(&mf, "solr_metrics_core_searcher_cache", &filter("lookups")), Some(20.0));
        assert_eq!(sample(&mf, "solr_metrics_core_searcher_cache_ratio", &filter("hitratio")), Some(0.95));
        assert_eq!(
            sample(&mf, "solr_metrics_core_searcher_warmup_time_seconds", &filter("warmupTime")),
            Some(3.0)
        );
        assert_eq!(
            sample(&mf, "solr_metrics_core_searcher_cumulative_cache_total", &filter("cumulative_hits")),
            Some(36.0)
        );
        assert_eq!(
            sample(&mf, "solr_metrics_core_fs_bytes", &[core0, ("item", "totalSpace")]),
            Some(107374182400.0)
        );
        assert_eq!(
            sample(&mf, "solr_metrics_core_highlighter_request_total", &[core0, ("item", "gap"), ("name", "simple")]),
            Some(0.0)
        );
        assert_eq!(sample(&mf, "solr_metrics_core_index_size_bytes", &[core0]), Some(4096.0));
        assert_eq!(
            sample(&mf, "solr_metrics_core_searcher_documents", &[core0, ("item", "numDocs")]),
            Some(100.0)
        );
    }

    #[test]
    fn test_core_replication() {
        let mf = full(CoreFilter::none());
        let repl = [("core", "core0"), ("handler", "/replication")];
        assert_eq!(sample(&mf, "solr_metrics_core_replication_master", &repl), Some(1.0));
        assert_eq!(sample(&mf, "solr_metrics_core_replication_slave", &repl), Some(0.0));
        assert_eq!(sample(&mf, "solr_metrics_core_replication_last_success", &repl), Some(1678789230.0));
        assert_eq!(sample(&mf, "solr_metrics_core_replication_last_fail", &repl), Some(0.0));
        assert_eq!(sample(&mf, "solr_metrics_core_replication_success_count", &repl), Some(5.0));
        assert_eq!(sample(&mf, "solr_metrics_core_replication_replicating", &repl), Some(0.0));
        assert_eq!(
            sample(&mf, "solr_metrics_core_replication_last_cycle_downloaded_bytes", &repl),
            Some(2048.0)
        );
    }

    #[test]
    fn test_core_update_handler() {
        let mf = full(CoreFilter::none());
        let update = [("core", "core0"), ("handler", "updateHandler")];
        assert_eq!(sample(&mf, "solr_metrics_core_update_handler_adds", &update), Some(5.0));
        assert_eq!(sample(&mf, "solr_metrics_core_update_handler_commits_total", &update), Some(3.0));
        assert_eq!(sample(&mf, "solr_metrics_core_update_handler_adds_total", &update), Some(100.0));
        assert_eq!(sample(&mf, "solr_metrics_core_update_handler_merges_total", &update), Some(2.0));
        assert_eq!(sample(&mf, "solr_metrics_core_update_handler_pending_docs", &update), Some(5.0));
        assert_eq!(
            sample(&mf, "solr_metrics_core_update_handler_soft_auto_commits_total", &update),
            Some(1.0)
        );
    }

    #[test]
    fn test_cloud_core_labels() {
        let mf = full(CoreFilter::none());
        assert_eq!(
            sample(
                &mf,
                "solr_metrics_core_requests_total",
                &[
                    ("core", "films_shard1_replica_n1"),
                    ("collection", "films"),
                    ("shard", "shard1"),
                    ("replica", "replica_n1"),
                ]
            ),
            Some(7.0)
        );
    }

    #[test]
    fn test_excluded_core_skipped() {
        let filter = CoreFilter::new("^films", Vec::<String>::new()).unwrap();
        let mf = full(filter);
        assert_eq!(
            sample(&mf, "solr_metrics_core_index_size_bytes", &[("collection", "films")]),
            None
        );
        assert_eq!(
            sample(&mf, "solr_metrics_core_index_size_bytes", &[("core", "core0")]),
            Some(4096.0)
        );
    }

    #[test]
    fn test_distrib_and_local_handler_stats_ignored() {
        let mut transport = MockTransport::new();
        transport.add_body(
            scenarios::metrics_url(),
            r#"{"metrics":{"solr.core.core0":{
                "QUERY./select.distrib.requestTimes":{"count":7,"p95_ms":9.0},
                "QUERY./select.local.requestTimes":{"count":8,"p95_ms":3.0},
                "QUERY./select.local.totalTime":5000,
                "QUERY./get.requestTimes":{"count":2}
            }}}"#,
        );
        let mf = collector(transport, CoreFilter::none()).collect();
        let select = [("core", "core0"), ("handler", "/select")];
        assert_eq!(sample(&mf, "solr_metrics_core_requests_total", &select), None);
        assert_eq!(sample(&mf, "solr_metrics_core_time_seconds_total", &select), None);
        assert_eq!(
            sample(&mf, "solr_metrics_core_requests_total", &[("handler", "/get")]),
            Some(2.0)
        );
    }

    #[test]
    fn test_fetch_failure_emits_nothing() {
        let mut transport = MockTransport::new();
        transport.add_status(scenarios::metrics_url(), 401);
        assert!(collector(transport, CoreFilter::none()).collect().is_empty());
    }

    #[test]
    fn test_no_metrics_object() {
        let mut transport = MockTransport::new();
        transport.add_body(scenarios::metrics_url(), r#"{"responseHeader":{"status":0}}"#);
        assert!(collector(transport, CoreFilter::none()).collect().is_empty());
    }
}
