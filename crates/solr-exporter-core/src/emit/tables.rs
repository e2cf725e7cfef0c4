//! Descriptor tables for the mbeans, JVM and ping collectors.
//!
//! The order of each table is the order of the value rows the extractor
//! builds, so rows and tables must be edited together.

use super::MetricDescriptor;

pub const ADMIN_LABELS: &[&str] = &["core"];
pub const HANDLER_LABELS: &[&str] = &["core", "handler", "class"];

const HANDLER: &[&str] = HANDLER_LABELS;

pub static UP_METRIC: MetricDescriptor =
    MetricDescriptor::gauge("solr_up", "Was the Solr instance query successful?", &[]);

pub static PING_METRIC: MetricDescriptor =
    MetricDescriptor::gauge("solr_ping", "See following URL: https://lucene.apache.org/solr/guide/ping.html", ADMIN_LABELS);

pub static ADMIN_METRICS: [MetricDescriptor; 4] = [
    MetricDescriptor::gauge("solr_admin_num_docs", "Documents in the core index.", ADMIN_LABELS),
    MetricDescriptor::gauge("solr_admin_size_in_bytes", "Core index size in bytes.", ADMIN_LABELS),
    MetricDescriptor::gauge("solr_admin_deleted_docs", "Deleted documents not yet merged away.", ADMIN_LABELS),
    MetricDescriptor::gauge("solr_admin_max_docs", "Documents including deleted ones.", ADMIN_LABELS),
];

pub static CORE_METRICS: [MetricDescriptor; 3] = [
    MetricDescriptor::gauge("solr_core_num_docs", "Documents visible to the searcher.", HANDLER),
    MetricDescriptor::gauge("solr_core_deleted_docs", "Deleted documents visible to the searcher.", HANDLER),
    MetricDescriptor::gauge("solr_core_max_docs", "Documents including deleted ones.", HANDLER),
];

pub static QUERY_METRICS: [MetricDescriptor; 14] = [
    MetricDescriptor::gauge("solr_queryhandler_15min_rate_reqs_per_second", "Requests per second, 15 minute rate.", HANDLER),
    MetricDescriptor::gauge("solr_queryhandler_5min_rate_reqs_per_second", "Requests per second, 5 minute rate.", HANDLER),
    MetricDescriptor::gauge("solr_queryhandler_75th_pc_request_time", "75th percentile request time in milliseconds.", HANDLER),
    MetricDescriptor::gauge("solr_queryhandler_95th_pc_request_time", "95th percentile request time in milliseconds.", HANDLER),
    MetricDescriptor::gauge("solr_queryhandler_99th_pc_request_time", "99th percentile request time in milliseconds.", HANDLER),
    MetricDescriptor::gauge("solr_queryhandler_999th_pc_request_time", "99.9th percentile request time in milliseconds.", HANDLER),
    MetricDescriptor::gauge("solr_queryhandler_avg_requests_per_second", "Average requests per second.", HANDLER),
    MetricDescriptor::gauge("solr_queryhandler_avg_time_per_request", "Average request time in milliseconds.", HANDLER),
    MetricDescriptor::gauge("solr_queryhandler_errors", "Requests that failed.", HANDLER),
    MetricDescriptor::gauge("solr_queryhandler_handler_start", "Handler start time, epoch milliseconds.", HANDLER),
    MetricDescriptor::gauge("solr_queryhandler_median_request_time", "Median request time in milliseconds.", HANDLER),
    MetricDescriptor::gauge("solr_queryhandler_requests", "Requests handled.", HANDLER),
    MetricDescriptor::gauge("solr_queryhandler_timeouts", "Requests that timed out.", HANDLER),
    MetricDescriptor::gauge("solr_queryhandler_total_time", "Total request time in milliseconds.", HANDLER),
];

pub static UPDATE_METRICS: [MetricDescriptor; 17] = [
    MetricDescriptor::gauge("solr_updatehandler_adds", "Documents added since the last commit.", HANDLER),
    MetricDescriptor::gauge("solr_updatehandler_autocommit_max_docs", "Autocommit document threshold.", HANDLER),
    MetricDescriptor::gauge("solr_updatehandler_autocommit_max_time", "Autocommit time threshold in milliseconds.", HANDLER),
    MetricDescriptor::gauge("solr_updatehandler_autocommits", "Automatic commits.", HANDLER),
    MetricDescriptor::gauge("solr_updatehandler_commits", "Commits.", HANDLER),
    MetricDescriptor::gauge("solr_updatehandler_cumulative_adds", "Documents added since startup.", HANDLER),
    MetricDescriptor::gauge("solr_updatehandler_cumulative_deletes_by_id", "Deletes by id since startup.", HANDLER),
    MetricDescriptor::gauge("solr_updatehandler_cumulative_deletes_by_query", "Deletes by query since startup.", HANDLER),
    MetricDescriptor::gauge("solr_updatehandler_cumulative_errors", "Update errors since startup.", HANDLER),
    MetricDescriptor::gauge("solr_updatehandler_deletes_by_id", "Deletes by id since the last commit.", HANDLER),
    MetricDescriptor::gauge("solr_updatehandler_deletes_by_query", "Deletes by query since the last commit.", HANDLER),
    MetricDescriptor::gauge("solr_updatehandler_docs_pending", "Documents pending commit.", HANDLER),
    MetricDescriptor::gauge("solr_updatehandler_errors", "Update errors since the last commit.", HANDLER),
    MetricDescriptor::gauge("solr_updatehandler_expunge_deletes", "Expunge deletes commits.", HANDLER),
    MetricDescriptor::gauge("solr_updatehandler_optimizes", "Optimize commits.", HANDLER),
    MetricDescriptor::gauge("solr_updatehandler_rollbacks", "Rollbacks.", HANDLER),
    MetricDescriptor::gauge("solr_updatehandler_soft_autocommits", "Automatic soft commits.", HANDLER),
];

pub static CACHE_METRICS: [MetricDescriptor; 12] = [
    MetricDescriptor::gauge("solr_cache_cumulative_evictions", "Evictions since startup.", HANDLER),
    MetricDescriptor::gauge("solr_cache_cumulative_hitratio", "Hit ratio since startup.", HANDLER),
    MetricDescriptor::gauge("solr_cache_cumulative_hits", "Hits since startup.", HANDLER),
    MetricDescriptor::gauge("solr_cache_cumulative_inserts", "Inserts since startup.", HANDLER),
    MetricDescriptor::gauge("solr_cache_cumulative_lookups", "Lookups since startup.", HANDLER),
    MetricDescriptor::gauge("solr_cache_evictions", "Evictions of the current searcher.", HANDLER),
    MetricDescriptor::gauge("solr_cache_hitratio", "Hit ratio of the current searcher.", HANDLER),
    MetricDescriptor::gauge("solr_cache_hits", "Hits of the current searcher.", HANDLER),
    MetricDescriptor::gauge("solr_cache_inserts", "Inserts of the current searcher.", HANDLER),
    MetricDescriptor::gauge("solr_cache_lookups", "Lookups of the current searcher.", HANDLER),
    MetricDescriptor::gauge("solr_cache_size", "Entries in the cache.", HANDLER),
    MetricDescriptor::gauge("solr_cache_warmup_time", "Autowarm time in milliseconds.", HANDLER),
];

const NONE: &[&str] = &[];

/// Label-less JVM readings, in the order of `JvmFields::values`.
pub static JVM_METRICS: [MetricDescriptor; 36] = [
    MetricDescriptor::counter("solr_jvm_gc_concurrentmarksweep_count", "CMS collections.", NONE),
    MetricDescriptor::counter("solr_jvm_gc_concurrentmarksweep_time", "CMS collection time in milliseconds.", NONE),
    MetricDescriptor::counter("solr_jvm_gc_parnew_count", "ParNew collections.", NONE),
    MetricDescriptor::counter("solr_jvm_gc_parnew_time", "ParNew collection time in milliseconds.", NONE),
    MetricDescriptor::gauge("solr_jvm_memory_heap_committed", "Committed heap bytes.", NONE),
    MetricDescriptor::gauge("solr_jvm_memory_heap_init", "Initial heap bytes.", NONE),
    MetricDescriptor::gauge("solr_jvm_memory_heap_max", "Maximum heap bytes.", NONE),
    MetricDescriptor::gauge("solr_jvm_memory_heap_usage", "Heap usage ratio.", NONE),
    MetricDescriptor::gauge("solr_jvm_memory_heap_used", "Used heap bytes.", NONE),
    MetricDescriptor::gauge("solr_jvm_memory_nonheap_committed", "Committed non-heap bytes.", NONE),
    MetricDescriptor::gauge("solr_jvm_memory_nonheap_init", "Initial non-heap bytes.", NONE),
    MetricDescriptor::gauge("solr_jvm_memory_nonheap_max", "Maximum non-heap bytes.", NONE),
    MetricDescriptor::gauge("solr_jvm_memory_nonheap_usage", "Non-heap usage ratio.", NONE),
    MetricDescriptor::gauge("solr_jvm_memory_nonheap_used", "Used non-heap bytes.", NONE),
    MetricDescriptor::gauge("solr_jvm_memory_total_committed", "Committed memory bytes.", NONE),
    MetricDescriptor::gauge("solr_jvm_memory_total_init", "Initial memory bytes.", NONE),
    MetricDescriptor::gauge("solr_jvm_memory_total_max", "Maximum memory bytes.", NONE),
    MetricDescriptor::gauge("solr_jvm_memory_total_used", "Used memory bytes.", NONE),
    MetricDescriptor::gauge("solr_jvm_os_availableprocessors", "Processors available to the JVM.", NONE),
    MetricDescriptor::gauge("solr_jvm_os_committedvirtualmemorysize", "Committed virtual memory bytes.", NONE),
    MetricDescriptor::gauge("solr_jvm_os_freephysicalmemorysize", "Free physical memory bytes.", NONE),
    MetricDescriptor::gauge("solr_jvm_os_freeswapspacesize", "Free swap bytes.", NONE),
    MetricDescriptor::gauge("solr_jvm_os_maxfiledescriptorcount", "File descriptor limit.", NONE),
    MetricDescriptor::gauge("solr_jvm_os_openfiledescriptorcount", "Open file descriptors.", NONE),
    MetricDescriptor::counter("solr_jvm_os_processcputime", "Process CPU time in nanoseconds.", NONE),
    MetricDescriptor::gauge("solr_jvm_os_systemloadaverage", "System load average.", NONE),
    MetricDescriptor::gauge("solr_jvm_os_totalphysicalmemorysize", "Total physical memory bytes.", NONE),
    MetricDescriptor::gauge("solr_jvm_os_totalswapspacesize", "Total swap bytes.", NONE),
    MetricDescriptor::gauge("solr_jvm_threads_blocked_count", "Blocked threads.", NONE),
    MetricDescriptor::gauge("solr_jvm_threads_daemon_count", "Daemon threads.", NONE),
    MetricDescriptor::gauge("solr_jvm_threads_deadlock_count", "Deadlocked threads.", NONE),
    MetricDescriptor::gauge("solr_jvm_threads_new_count", "New threads.", NONE),
    MetricDescriptor::gauge("solr_jvm_threads_runnable_count", "Runnable threads.", NONE),
    MetricDescriptor::gauge("solr_jvm_threads_terminated_count", "Terminated threads.", NONE),
    MetricDescriptor::gauge("solr_jvm_threads_timedwaiting_count", "Timed waiting threads.", NONE),
    MetricDescriptor::gauge("solr_jvm_threads_waiting_count", "Waiting threads.", NONE),
];
