//! Payload shapes of `/admin/metrics?group=jvm`.

use serde::Deserialize;

/// Number of JVM fields exported by the JVM collector.
pub const JVM_FIELD_COUNT: usize = 36;

/// A JVM gauge reading in either wire representation.
pub trait JvmValue {
    fn value(&self) -> f64;
}

impl JvmValue for f64 {
    fn value(&self) -> f64 {
        *self
    }
}

/// `{ "value": n }` wrapper used by Solr 6.x.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct ValueCell {
    #[serde(default)]
    pub value: f64,
}

impl JvmValue for ValueCell {
    fn value(&self) -> f64 {
        self.value
    }
}

/// The `solr.jvm` registry, generic over how each reading is wrapped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct JvmFields<T> {
    #[serde(rename = "gc.ConcurrentMarkSweep.count")]
    pub gc_cms_count: T,
    #[serde(rename = "gc.ConcurrentMarkSweep.time")]
    pub gc_cms_time: T,
    #[serde(rename = "gc.ParNew.count")]
    pub gc_parnew_count: T,
    #[serde(rename = "gc.ParNew.time")]
    pub gc_parnew_time: T,

    #[serde(rename = "memory.heap.committed")]
    pub heap_committed: T,
    #[serde(rename = "memory.heap.init")]
    pub heap_init: T,
    #[serde(rename = "memory.heap.max")]
    pub heap_max: T,
    #[serde(rename = "memory.heap.usage")]
    pub heap_usage: T,
    #[serde(rename = "memory.heap.used")]
    pub heap_used: T,

    #[serde(rename = "memory.non-heap.committed")]
    pub non_heap_committed: T,
    #[serde(rename = "memory.non-heap.init")]
    pub non_heap_init: T,
    #[serde(rename = "memory.non-heap.max")]
    pub non_heap_max: T,
    #[serde(rename = "memory.non-heap.usage")]
    pub non_heap_usage: T,
    #[serde(rename = "memory.non-heap.used")]
    pub non_heap_used: T,

    #[serde(rename = "memory.total.committed")]
    pub total_committed: T,
    #[serde(rename = "memory.total.init")]
    pub total_init: T,
    #[serde(rename = "memory.total.max")]
    pub total_max: T,
    #[serde(rename = "memory.total.used")]
    pub total_used: T,

    #[serde(rename = "os.availableProcessors")]
    pub os_available_processors: T,
    #[serde(rename = "os.committedVirtualMemorySize")]
    pub os_committed_virtual_memory_size: T,
    #[serde(rename = "os.freePhysicalMemorySize")]
    pub os_free_physical_memory_size: T,
    #[serde(rename = "os.freeSwapSpaceSize")]
    pub os_free_swap_space_size: T,
    #[serde(rename = "os.maxFileDescriptorCount")]
    pub os_max_file_descriptor_count: T,
    #[serde(rename = "os.openFileDescriptorCount")]
    pub os_open_file_descriptor_count: T,
    #[serde(rename = "os.processCpuTime")]
    pub os_process_cpu_time: T,
    #[serde(rename = "os.systemLoadAverage")]
    pub os_system_load_average: T,
    #[serde(rename = "os.totalPhysicalMemorySize")]
    pub os_total_physical_memory_size: T,
    #[serde(rename = "os.totalSwapSpaceSize")]
    pub os_total_swap_space_size: T,

    #[serde(rename = "threads.blocked.count")]
    pub threads_blocked: T,
    #[serde(rename = "threads.daemon.count")]
    pub threads_daemon: T,
    #[serde(rename = "threads.deadlock.count")]
    pub threads_deadlock: T,
    #[serde(rename = "threads.new.count")]
    pub threads_new: T,
    #[serde(rename = "threads.runnable.count")]
    pub threads_runnable: T,
    #[serde(rename = "threads.terminated.count")]
    pub threads_terminated: T,
    #[serde(rename = "threads.timed_waiting.count")]
    pub threads_timed_waiting: T,
    #[serde(rename = "threads.waiting.count")]
    pub threads_waiting: T,
}

impl<T: JvmValue> JvmFields<T> {
    /// Readings in the order of [`crate::emit::JVM_METRICS`].
    pub fn values(&self) -> [f64; JVM_FIELD_COUNT] {
        [
            self.gc_cms_count.value(),
            self.gc_cms_time.value(),
            self.gc_parnew_count.value(),
            self.gc_parnew_time.value(),
            self.heap_committed.value(),
            self.heap_init.value(),
            self.heap_max.value(),
            self.heap_usage.value(),
            self.heap_used.value(),
            self.non_heap_committed.value(),
            self.non_heap_init.value(),
            self.non_heap_max.value(),
            self.non_heap_usage.value(),
            self.non_heap_used.value(),
            self.total_committed.value(),
            self.total_init.value(),
            self.total_max.value(),
            self.total_used.value(),
            self.os_available_processors.value(),
            self.os_committed_virtual_memory_size.value(),
            self.os_free_physical_memory_size.value(),
            self.os_free_swap_space_size.value(),
            self.os_max_file_descriptor_count.value(),
            self.os_open_file_descriptor_count.value(),
            self.os_process_cpu_time.value(),
            self.os_system_load_average.value(),
            self.os_total_physical_memory_size.value(),
            self.os_total_swap_space_size.value(),
            self.threads_blocked.value(),
            self.threads_daemon.value(),
            self.threads_deadlock.value(),
            self.threads_new.value(),
            self.threads_runnable.value(),
            self.threads_terminated.value(),
            self.threads_timed_waiting.value(),
            self.threads_waiting.value(),
        ]
    }
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
struct Envelope<T> {
    metrics: Registries<T>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
struct Registries<T> {
    #[serde(rename = "solr.jvm")]
    jvm: JvmFields<T>,
}

/// JVM registry in whichever shape the server produced.
#[derive(Debug, Clone)]
pub enum JvmStatus {
    /// Plain numbers (Solr 7 and later).
    Flat(JvmFields<f64>),
    /// Every reading wrapped in `{ "value": n }` (Solr 6).
    Wrapped(JvmFields<ValueCell>),
}

impl JvmStatus {
    /// Decodes the flat shape first and falls back to the wrapped one.
    pub fn decode(body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Envelope<f64>>(body) {
            Ok(env) => Ok(JvmStatus::Flat(env.metrics.jvm)),
            Err(_) => serde_json::from_slice::<Envelope<ValueCell>>(body)
                .map(|env| JvmStatus::Wrapped(env.metrics.jvm)),
        }
    }

    pub fn values(&self) -> [f64; JVM_FIELD_COUNT] {
        match self {
            JvmStatus::Flat(fields) => fields.values(),
            JvmStatus::Wrapped(fields) => fields.values(),
        }
    }
}
