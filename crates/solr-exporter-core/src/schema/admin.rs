use std::collections::HashMap;

use serde::Deserialize;

use super::null_as_default;

/// Response of `/admin/cores?action=STATUS`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminCoresStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: HashMap<String, CoreStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoreStatus {
    #[serde(default, deserialize_with = "null_as_default")]
    pub index: IndexStats,
}

/// Index statistics of one core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexStats {
    pub size_in_bytes: f64,
    pub num_docs: f64,
    pub max_doc: f64,
    pub deleted_docs: f64,
}
