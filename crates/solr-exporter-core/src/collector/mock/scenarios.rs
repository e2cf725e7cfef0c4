//! Canned Solr payloads and ready-made mock servers.
//!
//! - `single_core`: one core whose every handler has class `X`
//! - `two_cores`: `core0` as above plus a Solr 7 style `core1`
//! - `legacy_server`: Solr 4: `...HANDLER` tags, legacy rate keys, text ratios

use super::MockTransport;
use crate::collector::{ADMIN_CORES_PATH, JVM_PATH, MBEANS_PATH, METRICS_PATH, PING_PATH};

pub const SOLR_ADDRESS: &str = "http://solr:8983";
pub const BASE_URL: &str = "http://solr:8983/solr";

pub fn cores_url() -> String {
    format!("{}{}", BASE_URL, ADMIN_CORES_PATH)
}

pub fn mbeans_url(core: &str) -> String {
    format!("{}/{}{}", BASE_URL, core, MBEANS_PATH)
}

pub fn ping_url(core: &str) -> String {
    format!("{}/{}{}", BASE_URL, core, PING_PATH)
}

pub fn jvm_url() -> String {
    format!("{}{}", BASE_URL, JVM_PATH)
}

pub fn metrics_url() -> String {
    format!("{}{}", BASE_URL, METRICS_PATH)
}

pub const SINGLE_CORE_STATUS: &str = r#"{
  "responseHeader": {"status": 0, "QTime": 0},
  "initFailures": {},
  "status": {
    "core0": {
      "name": "core0",
      "instanceDir": "/var/solr/data/core0",
      "startTime": "2023-03-14T10:20:30.000Z",
      "uptime": 1000,
      "index": {"numDocs": 100, "maxDoc": 120, "deletedDocs": 20, "version": 10, "segmentCount": 2,
                "current": true, "hasDeletions": true, "sizeInBytes": 4096, "size": "4 KB"}
    }
  }
}"#;

pub const TWO_CORES_STATUS: &str = r#"{
  "responseHeader": {"status": 0, "QTime": 1},
  "initFailures": {},
  "status": {
    "core0": {
      "name": "core0",
      "index": {"numDocs": 100, "maxDoc": 120, "deletedDocs": 20, "sizeInBytes": 4096, "size": "4 KB"}
    },
    "core1": {
      "name": "core1",
      "index": {"numDocs": 5, "maxDoc": 5, "deletedDocs": 0, "sizeInBytes": 2048, "size": "2 KB"}
    }
  }
}"#;

pub const LEGACY_STATUS: &str = r#"{
  "responseHeader": {"status": 0, "QTime": 2},
  "initFailures": {},
  "status": {
    "gettingstarted": {
      "name": "gettingstarted",
      "index": {"numDocs": 100, "maxDoc": 120, "deletedDocs": 20, "sizeInBytes": 4096, "size": "4 KB"}
    }
  }
}"#;

/// Every handler has class `X`; includes one entry for each exclusion rule.
pub const SIMPLE_MBEANS: &str = r#"{
  "responseHeader": {"status": 0, "QTime": 1},
  "solr-mbeans": [
    "CORE", {
      "searcher": {"class": "X", "stats": {"numDocs": 100, "maxDoc": 120, "deletedDocs": 20}},
      "Searcher@4f2a main": {"class": "X", "stats": {"numDocs": 100, "maxDoc": 120, "deletedDocs": 20}}
    },
    "QUERY", {
      "/select": {"class": "X", "stats": {
        "15minRateReqsPerSecond": 0.2, "5MinRateReqsPerSecond": 0.3,
        "75thPcRequestTime": 12.5, "95thPcRequestTime": 20.0, "99thPcRequestTime": 31.0, "999thPcRequestTime": 45.0,
        "avgRequestsPerSecond": 0.1, "avgTimePerRequest": 10.0, "errors": 1, "handlerStart": 1678789230000,
        "medianRequestTime": 9.0, "requests": 42, "timeouts": 0, "totalTime": 420.0}},
      "/admin/ping": {"class": "X", "stats": {"requests": 7}},
      "/debug/dump": {"class": "X", "stats": {"requests": 1}},
      "/schema": {"class": "X", "stats": {"requests": 1}},
      "org.apache.solr.handler.admin.LukeRequestHandler": {"class": "X", "stats": {"requests": 1}}
    },
    "UPDATE", {
      "updateHandler": {"class": "X", "stats": {
        "adds": 5, "autocommit maxDocs": 1000, "autocommit maxTime": "1500ms", "autocommits": 2, "commits": 3,
        "cumulative_adds": 100, "cumulative_deletesById": 1, "cumulative_deletesByQuery": 0, "cumulative_errors": 0,
        "deletesById": 0, "deletesByQuery": 0, "docsPending": 5, "errors": 0, "expungeDeletes": 0,
        "optimizes": 0, "rollbacks": 0, "soft autocommits": 1}},
      "/update": {"class": "X", "stats": {"requests": 3}}
    },
    "CACHE", {
      "filterCache": {"class": "X", "stats": {
        "lookups": 20, "hits": 19, "hitratio": 0.95, "inserts": 1, "evictions": 0, "size": 1, "warmupTime": 3,
        "cumulative_lookups": 40, "cumulative_hits": 36, "cumulative_hitratio": 0.9,
        "cumulative_inserts": 4, "cumulative_evictions": 0}},
      "fieldCache": {"class": "org.apache.solr.search.SolrFieldCacheMBean", "stats": {"entries_count": 0}}
    }
  ]
}"#;

/// Solr 7 style: modern rate keys, searcher-prefixed cache keys, `"NaN"` values.
pub const MODERN_MBEANS: &str = r#"{
  "responseHeader": {"status": 0, "QTime": 4},
  "solr-mbeans": [
    "CORE", {
      "core": {"class": "org.apache.solr.core.SolrCore", "description": "SolrCore",
               "stats": {"CORE.coreName": "core1", "CORE.refCount": 2}},
      "searcher": {"class": "org.apache.solr.search.SolrIndexSearcher",
                   "stats": {"numDocs": 5, "maxDoc": 5, "deletedDocs": 0}}
    },
    "QUERY", {
      "/select": {"class": "org.apache.solr.handler.component.SearchHandler", "stats": {
        "15minRateReqsPerSecond": 1.5, "5MinRateReqsPerSecond": 2.5, "requests": 9,
        "avgTimePerRequest": "NaN", "totalTime": 30.5}},
      "/admin/luke": {"class": "org.apache.solr.handler.admin.LukeRequestHandler", "stats": {"requests": 1}}
    },
    "UPDATE", {
      "updateHandler": {"class": "org.apache.solr.update.DirectUpdateHandler2",
                        "stats": {"commits": 1, "autocommit maxTime": "15000ms", "docsPending": 0}}
    },
    "CACHE", {
      "filterCache": {"class": "org.apache.solr.search.FastLRUCache", "stats": {
        "CACHE.searcher.filterCache.lookups": 20, "CACHE.searcher.filterCache.hitratio":"NaN",
        "CACHE.searcher.filterCache.size": 2, "CACHE.searcher.filterCache.warmupTime": 0}},
      "perSegFilter": {"class": "org.apache.solr.search.LRUCache", "stats": {
        "CACHE.searcher.perSegFilter.lookups": 0, "CACHE.searcher.perSegFilter.cumulative_hitratio": 0.0}},
      "fieldCache": {"class": "org.apache.solr.search.SolrFieldCacheBean",
                     "stats": {"CACHE.core.fieldCache.entries_count": 0}}
    }
  ]
}"#;

/// Solr 4 style document for core `gettingstarted`.
pub const LEGACY_MBEANS: &str = r#"{
  "responseHeader": {"status": 0, "QTime": 2},
  "solr-mbeans": [
    "CORE", {
      "searcher": {"class": "org.apache.solr.search.SolrIndexSearcher", "version": "1.0",
        "description": "index searcher", "src": "$URL$", "stats": {
          "searcherName": "Searcher@1a2b3c main", "caching": true, "numDocs": 100, "maxDoc": 120,
          "deletedDocs": 20, "reader": "StandardDirectoryReader(segments_3:9)", "indexVersion": 9,
          "openedAt": "2017-01-01T00:00:00.000Z", "warmupTime": 1}},
      "Searcher@1a2b3c main": {"class": "org.apache.solr.search.SolrIndexSearcher",
        "stats": {"numDocs": 100, "maxDoc": 120, "deletedDocs": 20}},
      "core": {"class": "gettingstarted", "stats": {
        "coreName": "gettingstarted", "startTime": "2017-01-01T00:00:00.000Z", "refCount": 2}}
    },
    "QUERYHANDLER", {
      "/select": {"class": "org.apache.solr.handler.component.SearchHandler", "stats": {
        "handlerStart": 1483228800000, "requests": 42, "errors": 1, "timeouts": 0, "totalTime": 420.5,
        "avgRequestsPerSecond": 0.01, "5minRateRequestsPerSecond": 0.25, "15minRateRequestsPerSecond": 0.5,
        "avgTimePerRequest": 10.0, "medianRequestTime": 8.0, "75thPcRequestTime": 12.0,
        "95thPcRequestTime": 20.0, "99thPcRequestTime": 30.0, "999thPcRequestTime": 40.0}},
      "/replication": {"class": "org.apache.solr.handler.ReplicationHandler", "stats": {
        "handlerStart": 1483228800000, "requests": 0, "5minRateRequestsPerSecond":"NaN",
        "15minRateRequestsPerSecond":"NaN", "indexSize": "4 KB", "isMaster": "true"}},
      "/admin/ping": {"class": "org.apache.solr.handler.PingRequestHandler", "stats": {"requests": 7}},
      "/debug/dump": {"class": "org.apache.solr.handler.DumpRequestHandler", "stats": {"requests": 0}},
      "/schema": {"class": "org.apache.solr.rest.SchemaRestApi", "stats": {"requests": 0}},
      "org.apache.solr.handler.admin.AdminHandlers": {"class": "org.apache.solr.handler.admin.AdminHandlers",
        "stats": null}
    },
    "UPDATEHANDLER", {
      "updateHandler": {"class": "org.apache.solr.update.DirectUpdateHandler2", "stats": {
        "commits": 3, "autocommit maxTime": "15000ms", "autocommits": 2, "soft autocommits": 0,
        "optimizes": 0, "rollbacks": 0, "expungeDeletes": 0, "docsPending": 5, "adds": 5,
        "deletesById": 0, "deletesByQuery": 0, "errors": 0, "cumulative_adds": 100,
        "cumulative_deletesById": 1, "cumulative_deletesByQuery": 0, "cumulative_errors": 0}},
      "/update": {"class": "org.apache.solr.handler.UpdateRequestHandler", "stats": {"requests": 3}}
    },
    "CACHE", {
      "filterCache": {"class": "org.apache.solr.search.FastLRUCache", "stats": {
        "lookups": 20, "hits": 19, "hitratio": "0.95", "inserts": 1, "evictions": 0, "size": 1,
        "warmupTime": 3, "cumulative_lookups": 40, "cumulative_hits": 36, "cumulative_hitratio": "0.90",
        "cumulative_inserts": 4, "cumulative_evictions": 0}},
      "documentCache": {"class": "org.apache.solr.search.LRUCache", "stats": {
        "lookups": 0, "hits": 0, "hitratio": "0.00", "inserts": 0, "evictions": 0, "size": 0,
        "warmupTime": 0, "cumulative_lookups": 0, "cumulative_hits": 0, "cumulative_hitratio": "0.00",
        "cumulative_inserts": 0, "cumulative_evictions": 0}},
      "fieldCache": {"class": "org.apache.solr.search.SolrFieldCacheMBean",
        "stats": {"entries_count": 0, "insanity_count": 0}}
    }
  ]
}"#;

/// `solr.jvm` registry with plain numbers.
pub const JVM_FLAT: &str = r#"{
  "responseHeader": {"status": 0, "QTime": 3},
  "metrics": {
    "solr.jvm": {
      "buffers.direct.Count": 4, "buffers.direct.MemoryUsed": 8192, "buffers.direct.TotalCapacity": 8192,
      "gc.ConcurrentMarkSweep.count": 3, "gc.ConcurrentMarkSweep.time": 150,
      "gc.ParNew.count": 40, "gc.ParNew.time": 1200,
      "memory.heap.committed": 536870912, "memory.heap.init": 536870912, "memory.heap.max": 536870912,
      "memory.heap.usage": 0.25, "memory.heap.used": 134217728,
      "memory.non-heap.committed": 67108864, "memory.non-heap.init": 2555904, "memory.non-heap.max": -1,
      "memory.non-heap.usage": -62914560, "memory.non-heap.used": 62914560,
      "memory.pools.Metaspace.committed": 50331648, "memory.pools.Metaspace.usage": 0.9,
      "memory.pools.Metaspace.used": 47185920,
      "memory.total.committed": 603979776, "memory.total.init": 539426816, "memory.total.max": 536870911,
      "memory.total.used": 197132288,
      "os.availableProcessors": 4, "os.committedVirtualMemorySize": 4294967296,
      "os.freePhysicalMemorySize": 1073741824, "os.freeSwapSpaceSize": 0,
      "os.maxFileDescriptorCount": 65536, "os.openFileDescriptorCount": 180,
      "os.processCpuLoad": 0.05, "os.processCpuTime": 35000, "os.systemCpuLoad": 0.1,
      "os.systemLoadAverage": 0.75, "os.totalPhysicalMemorySize": 8589934592, "os.totalSwapSpaceSize": 0,
      "os.name": "Linux", "os.arch": "amd64",
      "threads.blocked.count": 0, "threads.count": 35, "threads.daemon.count": 17,
      "threads.deadlock.count": 0, "threads.new.count": 0, "threads.runnable.count": 9,
      "threads.terminated.count": 0, "threads.timed_waiting.count": 12, "threads.waiting.count": 14,
      "system.properties": {"java.version": "1.8.0_151"}
    }
  }
}"#;

/// `solr.jvm` registry with `{ "value": n }` readings, as Solr 6 reports it.
pub const JVM_WRAPPED: &str = r#"{
  "responseHeader": {"status": 0, "QTime": 3},
  "metrics": {
    "solr.jvm": {
      "gc.ConcurrentMarkSweep.count": {"value": 3}, "gc.ParNew.count": {"value": 40},
      "memory.heap.used": {"value": 134217728}, "memory.heap.usage": {"value": 0.25},
      "os.systemLoadAverage": {"value": 0.75}, "threads.daemon.count": {"value": 17}
    }
  }
}"#;

/// Aggregate registries: jetty, jvm, node, one standalone and one SolrCloud core.
pub const METRICS_ALL: &str = r#"{
  "responseHeader": {"status": 0, "QTime": 12},
  "metrics": {
    "solr.jetty": {
      "org.eclipse.jetty.server.handler.DefaultHandler.2xx-responses": {"count": 1500, "meanRate": 0.5},
      "org.eclipse.jetty.server.handler.DefaultHandler.5xx-responses": {"count": 3},
      "org.eclipse.jetty.server.handler.DefaultHandler.get-requests": {"count": 1400, "max": 100.0},
      "org.eclipse.jetty.server.handler.DefaultHandler.post-requests": {"count": 103},
      "org.eclipse.jetty.server.handler.DefaultHandler.dispatches": {"count": 1503},
      "org.eclipse.jetty.server.handler.DefaultHandler.active-requests": {"count": 1}
    },
    "solr.jvm": {
      "buffers.direct.Count": 4, "buffers.direct.MemoryUsed": 8192, "buffers.direct.TotalCapacity": 8192,
      "gc.ParNew.count": 40, "gc.ParNew.time": 1200,
      "memory.heap.committed": 536870912, "memory.heap.usage": 0.25, "memory.heap.used": 134217728,
      "memory.non-heap.used": 62914560,
      "memory.pools.Metaspace.usage": 0.9, "memory.pools.Metaspace.used": 47185920,
      "memory.total.used": 197132288,
      "os.freePhysicalMemorySize": 1073741824, "os.openFileDescriptorCount": 180,
      "os.processCpuLoad": 0.05, "os.processCpuTime": 35000, "os.systemLoadAverage": 0.75,
      "threads.daemon.count": 17
    },
    "solr.node": {
      "ADMIN./admin/cores.clientErrors": {"count": 2},
      "ADMIN./admin/cores.serverErrors": {"count": 1},
      "ADMIN./admin/cores.timeouts": {"count": 0},
      "ADMIN./admin/cores.requestTimes": {"count": 50},
      "ADMIN./admin/cores.totalTime": 2500,
      "CONTAINER.cores.loaded": 2, "CONTAINER.cores.lazy": 0,
      "CONTAINER.fs.coreRoot.totalSpace": 107374182400, "CONTAINER.fs.coreRoot.usableSpace": 53687091200,
      "CONTAINER.threadPool.coreContainerWorkExecutor.completed": 10,
      "CONTAINER.threadPool.coreContainerWorkExecutor.running": 0,
      "CONTAINER.threadPool.coreContainerWorkExecutor.submitted": 10,
      "ADMIN./admin/collections.threadPool.parallelCoreAdminExecutor.completed": 4,
      "QUERY.httpShardHandler.availableConnections": 5,
      "QUERY.httpShardHandler.leasedConnections": 1
    },
    "solr.core.core0": {
      "QUERY./select.requestTimes": {"count": 42, "meanRate": 0.1, "p75_ms": 12.5, "p95_ms": 20.0,
        "p99_ms": 31.0, "mean_ms": 10.0, "median_ms": 9.0, "stddev_ms": 2.0},
      "QUERY./select.clientErrors": {"count": 1},
      "QUERY./select.errors": {"count": 1},
      "QUERY./select.serverErrors": {"count": 0},
      "QUERY./select.timeouts": {"count": 0},
      "QUERY./select.totalTime": 420,
      "QUERY.select.requestTimes": {"count": 99},
      "CACHE.core.fieldCache": {"entries_count": 3},
      "CACHE.searcher.filterCache": {"lookups": 20, "hits": 19, "hitratio": 0.95, "size": 1, "evictions": 0,
        "inserts": 1, "warmupTime": 3000, "cumulative_lookups": 40, "cumulative_hits": 36,
        "cumulative_evictions": 0, "cumulative_inserts": 4, "cumulative_hitratio": 0.9},
      "CORE.fs.totalSpace": 107374182400, "CORE.fs.usableSpace": 53687091200,
      "HIGHLIGHTER.gap.simple.requests": 0,
      "INDEX.sizeInBytes": 4096,
      "REPLICATION./replication.isMaster": true,
      "REPLICATION./replication.isSlave": false,
      "REPLICATION./replication.fetcher": {"indexReplicatedAt": "Tue Mar 14 10:20:30 UTC 2023",
        "replicationFailedAt": "never", "timesIndexReplicated": 5, "timesFailed": 1,
        "isReplicating": false, "lastCycleBytesDownloaded": 2048},
      "SEARCHER.searcher.deletedDocs": 20, "SEARCHER.searcher.maxDoc": 120, "SEARCHER.searcher.numDocs": 100,
      "UPDATE.updateHandler.adds": 5, "UPDATE.updateHandler.autoCommits": 2,
      "UPDATE.updateHandler.commits": {"count": 3}, "UPDATE.updateHandler.cumulativeAdds": {"count": 100},
      "UPDATE.updateHandler.cumulativeDeletesById": {"count": 1},
      "UPDATE.updateHandler.cumulativeDeletesByQuery": {"count": 0},
      "UPDATE.updateHandler.cumulativeErrors": {"count": 0},
      "UPDATE.updateHandler.deletesById": 0, "UPDATE.updateHandler.deletesByQuery": 0,
      "UPDATE.updateHandler.docsPending": 5, "UPDATE.updateHandler.errors": 0,
      "UPDATE.updateHandler.expungeDeletes": {"count": 0}, "UPDATE.updateHandler.merges": {"count": 2},
      "UPDATE.updateHandler.optimizes": {"count": 0}, "UPDATE.updateHandler.rollbacks": {"count": 0},
      "UPDATE.updateHandler.softAutoCommits": 1, "UPDATE.updateHandler.splits": {"count": 0}
    },
    "solr.core.films.shard1.replica_n1": {
      "QUERY./select.requestTimes": {"count": 7, "p75_ms": 1.0, "p95_ms": 2.0, "p99_ms": 3.0,
        "mean_ms": 1.0, "median_ms": 1.0, "stddev_ms": 0.5},
      "INDEX.sizeInBytes": 1024
    }
  }
}"#;

pub const PING_OK: &str = r#"{"responseHeader":{"status":0,"QTime":1},"status":"OK"}"#;

impl MockTransport {
    /// One core `core0`: 100 docs, 120 max, 20 deleted, 4096 bytes.
    pub fn single_core() -> Self {
        let mut t = Self::new();
        t.add_body(cores_url(), SINGLE_CORE_STATUS);
        t.add_body(mbeans_url("core0"), SIMPLE_MBEANS);
        t.add_body(ping_url("core0"), PING_OK);
        t
    }

    /// `core0` plus a Solr 7 style `core1` (5 docs).
    pub fn two_cores() -> Self {
        let mut t = Self::single_core();
        t.add_body(cores_url(), TWO_CORES_STATUS);
        t.add_body(mbeans_url("core1"), MODERN_MBEANS);
        t.add_body(ping_url("core1"), PING_OK);
        t
    }

    /// Solr 4 server with core `gettingstarted`.
    pub fn legacy_server() -> Self {
        let mut t = Self::new();
        t.add_body(cores_url(), LEGACY_STATUS);
        t.add_body(mbeans_url("gettingstarted"), LEGACY_MBEANS);
        t
    }

    /// Adds the JVM and aggregate metrics endpoints.
    pub fn with_metrics(mut self) -> Self {
        self.add_body(jvm_url(), JVM_FLAT);
        self.add_body(metrics_url(), METRICS_ALL);
        self
    }
}
