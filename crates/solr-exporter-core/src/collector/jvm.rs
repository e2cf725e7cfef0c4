//! JVM registry as label-less gauges and counters.

use std::sync::{Arc, Mutex};

use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use tracing::warn;

use super::traits::Transport;
use super::{CollectError, JVM_PATH, excerpt, lock_cycle};
use crate::config::ExporterConfig;
use crate::emit::{FamilySet, JVM_METRICS};
use crate::schema::JvmStatus;

pub struct JvmCollector {
    config: ExporterConfig,
    transport: Arc<dyn Transport>,
    cycle: Mutex<()>,
    families: FamilySet,
}

impl JvmCollector {
    pub fn new(config: ExporterConfig, transport: Arc<dyn Transport>) -> prometheus::Result<Self> {
        Ok(Self {
            config,
            transport,
            cycle: Mutex::new(()),
            families: FamilySet::new(&JVM_METRICS)?,
        })
    }

    fn update(&self) -> Result<(), CollectError> {
        let url = format!("{}{}", self.config.base_url, JVM_PATH);
        let body = self.transport.get(&url)?;
        let status = JvmStatus::decode(&body).map_err(|e| {
            warn!(payload = %excerpt(&body), "unexpected jvm payload");
            CollectError::Decode {
                what: "jvm metrics",
                message: e.to_string(),
            }
        })?;
        self.families.set_row(&[], &status.values())?;
        Ok(())
    }
}

impl Collector for JvmCollector {
    fn desc(&self) -> Vec<&Desc> {
        self.families.desc()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let _guard = lock_cycle(&self.cycle);
        self.families.reset();
        if let Err(e) = self.update() {
            warn!(error = %e, "jvm collection failed");
            self.families.reset();
            return Vec::new();
        }
        self.families.collect()
    }
}
