//! Core discovery via the CoreAdmin STATUS action.

use tracing::debug;

use super::traits::Transport;
use super::{ADMIN_CORES_PATH, CollectError};
use crate::config::ExporterConfig;
use crate::schema::{AdminCoresStatus, IndexStats};

/// A live, non-excluded core.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredCore {
    pub name: String,
    pub index: IndexStats,
}

/// Lists the cores the server reports, minus the excluded ones, sorted by name.
///
/// Transport and decode failures are returned as-is; callers never see a
/// partial list.
pub fn discover_cores(
    transport: &dyn Transport,
    config: &ExporterConfig,
) -> Result<Vec<DiscoveredCore>, CollectError> {
    let url = format!("{}{}", config.base_url, ADMIN_CORES_PATH);
    let body = transport.get(&url)?;
    let status: AdminCoresStatus =
        serde_json::from_slice(&body).map_err(|e| CollectError::Decode {
            what: "core status",
            message: e.to_string(),
        })?;

    let mut cores: Vec<DiscoveredCore> = status
        .status
        .into_iter()
        .filter(|(name, _)| {
            let excluded = config.core_filter.is_excluded(name);
            if excluded {
                debug!(core = %name, "core excluded");
            }
            !excluded
        })
        .map(|(name, core)| DiscoveredCore {
            name,
            index: core.index,
        })
        .collect();
    cores.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(cores)
}

/// URL of an endpoint under one core.
pub(crate) fn core_url(config: &ExporterConfig, core: &str, path: &str) -> String {
    format!("{}/{}{}", config.base_url, core, path)
}
