//! Descriptors for the aggregate `/admin/metrics` collector.

use super::MetricDescriptor;

/// Help text shared by every aggregate metric.
pub const METRICS_HELP: &str =
    "See following URL: https://lucene.apache.org/solr/guide/metrics-reporting.html";

const H: &str = METRICS_HELP;

const CORE: &[&str] = &["category", "handler", "core", "collection", "shard", "replica"];
const CORE_ONLY: &[&str] = &["category", "core", "collection", "shard", "replica"];
const CORE_ITEM: &[&str] = &["category", "core", "item", "collection", "shard", "replica"];
const CORE_CACHE: &[&str] = &["category", "core", "type", "item", "collection", "shard", "replica"];
const CORE_HIGHLIGHTER: &[&str] = &["category", "core", "item", "name", "collection", "shard", "replica"];
const NODE: &[&str] = &["category", "handler"];
const NODE_ITEM: &[&str] = &["category", "item"];
const NODE_POOL: &[&str] = &["category", "handler", "executor"];
const ITEM: &[&str] = &["item"];

pub static AGGREGATE_METRICS: [MetricDescriptor; 76] = [
    // jetty
    MetricDescriptor::counter("solr_metrics_jetty_response_total", H, &["status"]),
    MetricDescriptor::counter("solr_metrics_jetty_requests_total", H, &["method"]),
    MetricDescriptor::counter("solr_metrics_jetty_dispatches_total", H, &[]),
    // core handlers
    MetricDescriptor::counter("solr_metrics_core_client_errors_total", H, CORE),
    MetricDescriptor::counter("solr_metrics_core_errors_total", H, CORE),
    MetricDescriptor::counter("solr_metrics_core_requests_total", H, CORE),
    MetricDescriptor::counter("solr_metrics_core_server_errors_total", H, CORE),
    MetricDescriptor::counter("solr_metrics_core_timeouts_total", H, CORE),
    MetricDescriptor::counter("solr_metrics_core_time_seconds_total", H, CORE),
    MetricDescriptor::gauge("solr_metrics_core_requests_p75_ms", H, CORE),
    MetricDescriptor::gauge("solr_metrics_core_requests_p95_ms", H, CORE),
    MetricDescriptor::gauge("solr_metrics_core_requests_p99_ms", H, CORE),
    MetricDescriptor::gauge("solr_metrics_core_requests_mean_ms", H, CORE),
    MetricDescriptor::gauge("solr_metrics_core_requests_median_ms", H, CORE),
    MetricDescriptor::gauge("solr_metrics_core_requests_stddev_ms", H, CORE),
    // core caches and index
    MetricDescriptor::counter("solr_metrics_core_field_cache_total", H, CORE_ONLY),
    MetricDescriptor::gauge("solr_metrics_core_searcher_cache", H, CORE_CACHE),
    MetricDescriptor::gauge("solr_metrics_core_searcher_cache_ratio", H, CORE_CACHE),
    MetricDescriptor::gauge("solr_metrics_core_searcher_warmup_time_seconds", H, CORE_CACHE),
    MetricDescriptor::counter("solr_metrics_core_searcher_cumulative_cache_total", H, CORE_CACHE),
    MetricDescriptor::gauge("solr_metrics_core_searcher_cumulative_cache_ratio", H, CORE_CACHE),
    MetricDescriptor::gauge("solr_metrics_core_fs_bytes", H, CORE_ITEM),
    MetricDescriptor::counter("solr_metrics_core_highlighter_request_total", H, CORE_HIGHLIGHTER),
    MetricDescriptor::gauge("solr_metrics_core_index_size_bytes", H, CORE_ONLY),
    MetricDescriptor::gauge("solr_metrics_core_searcher_documents", H, CORE_ITEM),
    // core replication
    MetricDescriptor::gauge("solr_metrics_core_replication_master", H, CORE),
    MetricDescriptor::gauge("solr_metrics_core_replication_slave", H, CORE),
    MetricDescriptor::gauge("solr_metrics_core_replication_last_success", H, CORE),
    MetricDescriptor::gauge("solr_metrics_core_replication_last_fail", H, CORE),
    MetricDescriptor::gauge("solr_metrics_core_replication_success_count", H, CORE),
    MetricDescriptor::gauge("solr_metrics_core_replication_fail_count", H, CORE),
    MetricDescriptor::gauge("solr_metrics_core_replication_replicating", H, CORE),
    MetricDescriptor::gauge("solr_metrics_core_replication_last_cycle_downloaded_bytes", H, CORE),
    // core update handler
    MetricDescriptor::gauge("solr_metrics_core_update_handler_adds", H, CORE),
    MetricDescriptor::counter("solr_metrics_core_update_handler_auto_commits_total", H, CORE),
    MetricDescriptor::counter("solr_metrics_core_update_handler_commits_total", H, CORE),
    MetricDescriptor::counter("solr_metrics_core_update_handler_adds_total", H, CORE),
    MetricDescriptor::counter("solr_metrics_core_update_handler_deletes_by_id_total", H, CORE),
    MetricDescriptor::counter("solr_metrics_core_update_handler_deletes_by_query_total", H, CORE),
    MetricDescriptor::counter("solr_metrics_core_update_handler_errors_total", H, CORE),
    MetricDescriptor::gauge("solr_metrics_core_update_handler_deletes_by_id", H, CORE),
    MetricDescriptor::gauge("solr_metrics_core_update_handler_deletes_by_query", H, CORE),
    MetricDescriptor::gauge("solr_metrics_core_update_handler_pending_docs", H, CORE),
    MetricDescriptor::gauge("solr_metrics_core_update_handler_errors", H, CORE),
    MetricDescriptor::counter("solr_metrics_core_update_handler_expunge_deletes_total", H, CORE),
    MetricDescriptor::counter("solr_metrics_core_update_handler_merges_total", H, CORE),
    MetricDescriptor::counter("solr_metrics_core_update_handler_optimizes_total", H, CORE),
    MetricDescriptor::counter("solr_metrics_core_update_handler_rollbacks_total", H, CORE),
    MetricDescriptor::counter("solr_metrics_core_update_handler_soft_auto_commits_total", H, CORE),
    MetricDescriptor::counter("solr_metrics_core_update_handler_splits_total", H, CORE),
    // jvm
    MetricDescriptor::gauge("solr_metrics_jvm_buffers", H, &["pool"]),
    MetricDescriptor::gauge("solr_metrics_jvm_buffers_bytes", H, &["pool", "item"]),
    MetricDescriptor::counter("solr_metrics_jvm_gc_total", H, ITEM),
    MetricDescriptor::counter("solr_metrics_jvm_gc_seconds_total", H, ITEM),
    MetricDescriptor::gauge("solr_metrics_jvm_memory_heap_bytes", H, ITEM),
    MetricDescriptor::gauge("solr_metrics_jvm_memory_non_heap_bytes", H, ITEM),
    MetricDescriptor::gauge("solr_metrics_jvm_memory_pools_bytes", H, &["space", "item"]),
    MetricDescriptor::gauge("solr_metrics_jvm_memory_bytes", H, ITEM),
    MetricDescriptor::gauge("solr_metrics_jvm_os_memory_bytes", H, ITEM),
    MetricDescriptor::gauge("solr_metrics_jvm_os_file_descriptors", H, ITEM),
    MetricDescriptor::gauge("solr_metrics_jvm_os_cpu_load", H, ITEM),
    MetricDescriptor::counter("solr_metrics_jvm_os_cpu_time_seconds", H, ITEM),
    MetricDescriptor::gauge("solr_metrics_jvm_os_load_average", H, ITEM),
    MetricDescriptor::gauge("solr_metrics_jvm_threads", H, ITEM),
    // node
    MetricDescriptor::counter("solr_metrics_node_client_errors_total", H, NODE),
    MetricDescriptor::counter("solr_metrics_node_errors_total", H, NODE),
    MetricDescriptor::counter("solr_metrics_node_requests_total", H, NODE),
    MetricDescriptor::counter("solr_metrics_node_server_errors_total", H, NODE),
    MetricDescriptor::counter("solr_metrics_node_timeouts_total", H, NODE),
    MetricDescriptor::counter("solr_metrics_node_time_seconds_total", H, NODE),
    MetricDescriptor::gauge("solr_metrics_node_cores", H, NODE_ITEM),
    MetricDescriptor::gauge("solr_metrics_node_core_root_fs_bytes", H, NODE_ITEM),
    MetricDescriptor::counter("solr_metrics_node_thread_pool_completed_total", H, NODE_POOL),
    MetricDescriptor::gauge("solr_metrics_node_thread_pool_running", H, NODE_POOL),
    MetricDescriptor::counter("solr_metrics_node_thread_pool_submitted_total", H, NODE_POOL),
    MetricDescriptor::gauge("solr_metrics_node_connections", H, &["category", "handler", "item"]),
];
