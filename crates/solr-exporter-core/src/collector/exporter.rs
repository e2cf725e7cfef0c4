//! mbeans exporter: discovery plus per-core statistics.

use std::sync::{Arc, Mutex};

use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::Gauge;
use tracing::{debug, error, warn};

use super::discovery::{DiscoveredCore, core_url, discover_cores};
use super::mbeans::{Extraction, extract_mbeans};
use super::traits::Transport;
use super::{CollectError, MBEANS_PATH, excerpt, lock_cycle};
use crate::config::ExporterConfig;
use crate::emit::{
    ADMIN_METRICS, CACHE_METRICS, CORE_METRICS, FamilySet, QUERY_METRICS, UP_METRIC,
    UPDATE_METRICS, new_gauge,
};

/// One core's contribution to a pass.
struct CoreScrape {
    core: DiscoveredCore,
    /// `None` when the mbeans document was structurally broken.
    extraction: Option<Extraction>,
}

/// Exports core index stats and mbeans handler statistics plus `solr_up`.
///
/// Each `collect()` is one pass under a lock: reset, discover, fetch every
/// core, then emit. A transport failure anywhere ends the pass with only
/// `solr_up 0`. A broken mbeans document only drops that core's handler
/// metrics.
pub struct MBeansExporter {
    config: ExporterConfig,
    transport: Arc<dyn Transport>,
    cycle: Mutex<()>,
    up: Gauge,
    admin: FamilySet,
    core: FamilySet,
    query: FamilySet,
    update: FamilySet,
    cache: FamilySet,
}

impl MBeansExporter {
    pub fn new(config: ExporterConfig, transport: Arc<dyn Transport>) -> prometheus::Result<Self> {
        Ok(Self {
            config,
            transport,
            cycle: Mutex::new(()),
            up: new_gauge(&UP_METRIC)?,
            admin: FamilySet::new(&ADMIN_METRICS)?,
            core: FamilySet::new(&CORE_METRICS)?,
            query: FamilySet::new(&QUERY_METRICS)?,
            update: FamilySet::new(&UPDATE_METRICS)?,
            cache: FamilySet::new(&CACHE_METRICS)?,
        })
    }

    fn families(&self) -> [&FamilySet; 5] {
        [&self.admin, &self.core, &self.query, &self.update, &self.cache]
    }

    fn reset(&self) {
        for family in self.families() {
            family.reset();
        }
    }

    /// Discovers and fetches every core. Nothing is emitted here.
    fn pull(&self) -> Result<Vec<CoreScrape>, CollectError> {
        let cores = discover_cores(self.transport.as_ref(), &self.config)?;
        debug!(cores = cores.len(), "discovered cores");

        let mut scrapes = Vec::with_capacity(cores.len());
        for core in cores {
            let url = core_url(&self.config, &core.name, MBEANS_PATH);
            let body = self.transport.get(&url)?;
            let extraction = match extract_mbeans(&body) {
                Ok(extraction) => {
                    for e in &extraction.errors {
                        warn!(core = %core.name, error = %e, "mbeans field error");
                    }
                    Some(extraction)
                }
                Err(e) => {
                    error!(core = %core.name, error = %e, payload = %excerpt(&body),
                        "failed to extract mbeans");
                    None
                }
            };
            scrapes.push(CoreScrape { core, extraction });
        }
        Ok(scrapes)
    }

    fn apply(&self, scrapes: &[CoreScrape]) -> Result<(), CollectError> {
        for scrape in scrapes {
            let name = scrape.core.name.as_str();
            let index = &scrape.core.index;
            self.admin.set_row(
                &[name],
                &[index.num_docs, index.size_in_bytes, index.deleted_docs, index.max_doc],
            )?;

            let Some(extraction) = &scrape.extraction else {
                continue;
            };
            for (family, rows) in [
                (&self.core, &extraction.core),
                (&self.query, &extraction.query),
                (&self.update, &extraction.update),
                (&self.cache, &extraction.cache),
            ] {
                for row in rows {
                    family.set_row(&[name, row.handler.as_str(), row.class.as_str()], &row.values)?;
                }
            }
        }
        Ok(())
    }

    /// Runs one pass and reports whether it succeeded.
    ///
    /// On failure every family is left empty. Callers must hold the cycle lock.
    fn run_cycle(&self) -> bool {
        self.reset();
        self.up.set(0.0);
        let result = self.pull().and_then(|scrapes| self.apply(&scrapes));
        match result {
            Ok(()) => {
                self.up.set(1.0);
                true
            }
            Err(e) => {
                error!(error = %e, "scrape failed");
                self.reset();
                false
            }
        }
    }
}

impl Collector for MBeansExporter {
    fn desc(&self) -> Vec<&Desc> {
        let mut descs = self.up.desc();
        for family in self.families() {
            descs.extend(family.desc());
        }
        descs
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let _guard = lock_cycle(&self.cycle);
        let mut out = Vec::new();
        if self.run_cycle() {
            for family in self.families() {
                out.extend(family.collect());
            }
        }
        out.extend(self.up.collect());
        out
    }
}
