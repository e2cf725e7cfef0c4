//! Metric descriptors and the families that carry per-scrape values.
//!
//! Descriptor tables are `const` data; a [`FamilySet`] turns one table into
//! registered label vectors at startup. Values are reset and re-set on every
//! scrape, nothing accumulates between scrapes.

mod aggregate;
mod tables;

pub use aggregate::{AGGREGATE_METRICS, METRICS_HELP};
pub use tables::{
    ADMIN_LABELS, ADMIN_METRICS, CACHE_METRICS, CORE_METRICS, HANDLER_LABELS, JVM_METRICS,
    PING_METRIC, QUERY_METRICS, UP_METRIC, UPDATE_METRICS,
};

use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::{CounterVec, Gauge, GaugeVec, Opts};

/// Exposition type of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Gauge,
    Counter,
}

/// Name, help text, label schema and type of one metric.
#[derive(Debug, Clone, Copy)]
pub struct MetricDescriptor {
    pub name: &'static str,
    pub help: &'static str,
    pub labels: &'static [&'static str],
    pub kind: MetricKind,
}

impl MetricDescriptor {
    pub const fn gauge(
        name: &'static str,
        help: &'static str,
        labels: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            help,
            labels,
            kind: MetricKind::Gauge,
        }
    }

    pub const fn counter(
        name: &'static str,
        help: &'static str,
        labels: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            help,
            labels,
            kind: MetricKind::Counter,
        }
    }
}

enum FamilyVec {
    Gauge(GaugeVec),
    Counter(CounterVec),
}

/// Label vector backing one descriptor.
pub struct Family {
    descriptor: &'static MetricDescriptor,
    vec: FamilyVec,
}

impl Family {
    pub fn new(descriptor: &'static MetricDescriptor) -> prometheus::Result<Self> {
        let opts = Opts::new(descriptor.name, descriptor.help);
        let vec = match descriptor.kind {
            MetricKind::Gauge => FamilyVec::Gauge(GaugeVec::new(opts, descriptor.labels)?),
            MetricKind::Counter => FamilyVec::Counter(CounterVec::new(opts, descriptor.labels)?),
        };
        Ok(Self { descriptor, vec })
    }

    /// Sets the sample for `labels`.
    ///
    /// Label values must match the descriptor's schema in number and order;
    /// a mismatch is returned as `InconsistentCardinality`. Counters are
    /// clamped at zero.
    pub fn set(&self, labels: &[&str], value: f64) -> prometheus::Result<()> {
        match &self.vec {
            FamilyVec::Gauge(vec) => vec.get_metric_with_label_values(labels)?.set(value),
            FamilyVec::Counter(vec) => {
                let counter = vec.get_metric_with_label_values(labels)?;
                counter.reset();
                counter.inc_by(value.max(0.0));
            }
        }
        Ok(())
    }

    pub fn reset(&self) {
        match &self.vec {
            FamilyVec::Gauge(vec) => vec.reset(),
            FamilyVec::Counter(vec) => vec.reset(),
        }
    }

    pub fn desc(&self) -> Vec<&Desc> {
        match &self.vec {
            FamilyVec::Gauge(vec) => vec.desc(),
            FamilyVec::Counter(vec) => vec.desc(),
        }
    }

    pub fn collect(&self) -> Vec<MetricFamily> {
        match &self.vec {
            FamilyVec::Gauge(vec) => vec.collect(),
            FamilyVec::Counter(vec) => vec.collect(),
        }
    }
}

/// Families for one descriptor table, in table order.
pub struct FamilySet {
    families: Vec<Family>,
}

impl FamilySet {
    pub fn new(table: &'static [MetricDescriptor]) -> prometheus::Result<Self> {
        let families = table.iter().map(Family::new).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { families })
    }

    /// Sets one value per family, all under the same labels.
    pub fn set_row(&self, labels: &[&str], values: &[f64]) -> prometheus::Result<()> {
        if values.len() != self.families.len() {
            return Err(prometheus::Error::Msg(format!(
                "expected {} values, got {}",
                self.families.len(),
                values.len()
            )));
        }
        for (family, value) in self.families.iter().zip(values) {
            family.set(labels, *value)?;
        }
        Ok(())
    }

    /// Sets the family named `name`.
    pub fn set(&self, name: &str, labels: &[&str], value: f64) -> prometheus::Result<()> {
        self.get(name)
            .ok_or_else(|| prometheus::Error::Msg(format!("unknown metric {}", name)))?
            .set(labels, value)
    }

    pub fn get(&self, name: &str) -> Option<&Family> {
        self.families.iter().find(|f| f.descriptor.name == name)
    }

    pub fn reset(&self) {
        for family in &self.families {
            family.reset();
        }
    }

    pub fn desc(&self) -> Vec<&Desc> {
        self.families.iter().flat_map(Family::desc).collect()
    }

    pub fn collect(&self) -> Vec<MetricFamily> {
        self.families.iter().flat_map(Family::collect).collect()
    }
}

/// Builds the label-less success gauge.
pub fn new_gauge(descriptor: &MetricDescriptor) -> prometheus::Result<Gauge> {
    Gauge::with_opts(Opts::new(descriptor.name, descriptor.help))
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_TABLE: [MetricDescriptor; 2] = [
        MetricDescriptor::gauge("test_gauge", "test gauge", &["core"]),
        MetricDescriptor::counter("test_total", "test counter", &["core"]),
    ];

    fn samples(set: &FamilySet) -> Vec<(String, f64)> {
        let mut out = Vec::new();
        for mf in set.collect() {
            for m in mf.get_metric() {
                let v = if m.has_counter() {
                    m.get_counter().get_value()
                } else {
                    m.get_gauge().get_value()
                };
                out.push((mf.get_name().to_string(), v));
            }
        }
        out
    }

    #[test]
    fn test_set_row_and_reset() {
        let set = FamilySet::new(&TEST_TABLE).unwrap();
        set.set_row(&["core0"], &[1.5, 3.0]).unwrap();
        assert_eq!(
            samples(&set),
            vec![("test_gauge".to_string(), 1.5), ("test_total".to_string(), 3.0)]
        );
        set.reset();
        assert!(samples(&set).is_empty());
    }

    #[test]
    fn test_counter_set_is_not_cumulative() {
        let set = FamilySet::new(&TEST_TABLE).unwrap();
        set.set("test_total", &["core0"], 5.0).unwrap();
        set.set("test_total", &["core0"], 7.0).unwrap();
        assert_eq!(samples(&set), vec![("test_total".to_string(), 7.0)]);
    }

    #[test]
    fn test_negative_counter_clamped() {
        let set = FamilySet::new(&TEST_TABLE).unwrap();
        set.set("test_total", &["core0"], -2.0).unwrap();
        assert_eq!(samples(&set), vec![("test_total".to_string(), 0.0)]);
    }

    #[test]
    fn test_label_mismatch_is_error() {
        let set = FamilySet::new(&TEST_TABLE).unwrap();
        assert!(set.set("test_gauge", &["core0", "extra"], 1.0).is_err());
        assert!(set.set("test_gauge", &[], 1.0).is_err());
        assert!(samples(&set).is_empty());
    }

    #[test]
    fn test_row_length_mismatch_is_error() {
        let set = FamilySet::new(&TEST_TABLE).unwrap();
        assert!(set.set_row(&["core0"], &[1.0]).is_err());
    }

    #[test]
    fn test_unknown_name_is_error() {
        let set = FamilySet::new(&TEST_TABLE).unwrap();
        assert!(set.set("nope", &["core0"], 1.0).is_err());
    }
}
