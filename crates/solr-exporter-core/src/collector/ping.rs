//! Per-core ping handler health.

use std::sync::{Arc, Mutex};

use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use tracing::{debug, warn};

use super::discovery::{core_url, discover_cores};
use super::traits::Transport;
use super::{CollectError, PING_PATH, lock_cycle};
use crate::config::ExporterConfig;
use crate::emit::{Family, PING_METRIC};

/// Emits `solr_ping{core}`: 1 when the core's ping handler answers 2xx, 0 otherwise.
pub struct PingCollector {
    config: ExporterConfig,
    transport: Arc<dyn Transport>,
    cycle: Mutex<()>,
    ping: Family,
}

impl PingCollector {
    pub fn new(config: ExporterConfig, transport: Arc<dyn Transport>) -> prometheus::Result<Self> {
        Ok(Self {
            config,
            transport,
            cycle: Mutex::new(()),
            ping: Family::new(&PING_METRIC)?,
        })
    }

    fn update(&self) -> Result<(), CollectError> {
        let cores = discover_cores(self.transport.as_ref(), &self.config)?;
        for core in &cores {
            let url = core_url(&self.config, &core.name, PING_PATH);
            let healthy = match self.transport.get(&url) {
                Ok(_) => 1.0,
                Err(e) => {
                    debug!(core = %core.name, error = %e, "ping failed");
                    0.0
                }
            };
            self.ping.set(&[core.name.as_str()], healthy)?;
        }
        Ok(())
    }
}

impl Collector for PingCollector {
    fn desc(&self) -> Vec<&Desc> {
        self.ping.desc()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let _guard = lock_cycle(&self.cycle);
        self.ping.reset();
        if let Err(e) = self.update() {
            warn!(error = %e, "ping collection failed");
            self.ping.reset();
            return Vec::new();
        }
        self.ping.collect()
    }
}
