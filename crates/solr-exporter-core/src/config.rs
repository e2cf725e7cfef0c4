//! Exporter configuration.
//!
//! The binary builds an [`ExporterConfig`] from CLI flags; everything in the
//! core library reads its settings from here.

use std::collections::HashSet;
use std::time::Duration;

use regex::Regex;

/// Default Solr address.
pub const DEFAULT_SOLR_ADDRESS: &str = "http://localhost:8983";
/// Default Solr context path.
pub const DEFAULT_CONTEXT_PATH: &str = "/solr";
/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Error raised while building the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Exclusion pattern is not a valid regular expression.
    InvalidPattern(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPattern(msg) => write!(f, "invalid core exclusion pattern: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Decides which cores are skipped entirely.
///
/// A core is excluded when its name matches the pattern (unanchored search)
/// or appears in the explicit ignore-list.
#[derive(Debug, Clone, Default)]
pub struct CoreFilter {
    pattern: Option<Regex>,
    names: HashSet<String>,
}

impl CoreFilter {
    /// Filter that excludes nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Builds a filter from a regex pattern and a list of names.
    ///
    /// An empty pattern means no pattern. Blank names are dropped.
    pub fn new<I, S>(pattern: &str, names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pattern = if pattern.is_empty() {
            None
        } else {
            Some(Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern(e.to_string()))?)
        };
        let names = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        Ok(Self { pattern, names })
    }

    pub fn is_excluded(&self, core: &str) -> bool {
        if self.names.contains(core) {
            return true;
        }
        self.pattern.as_ref().is_some_and(|re| re.is_match(core))
    }
}

/// Settings shared by every collector.
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    /// Solr address joined with the context path, without trailing slash.
    pub base_url: String,
    /// Deadline applied to each outbound request.
    pub timeout: Duration,
    pub core_filter: CoreFilter,
}

impl ExporterConfig {
    pub fn new(address: &str, context_path: &str, timeout: Duration, core_filter: CoreFilter) -> Self {
        Self {
            base_url: join_base_url(address, context_path),
            timeout,
            core_filter,
        }
    }
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_SOLR_ADDRESS,
            DEFAULT_CONTEXT_PATH,
            DEFAULT_TIMEOUT,
            CoreFilter::none(),
        )
    }
}

fn join_base_url(address: &str, context_path: &str) -> String {
    let address = address.trim_end_matches('/');
    let context = context_path.trim_matches('/');
    if context.is_empty() {
        address.to_string()
    } else {
        format!("{}/{}", address, context)
    }
}
