//! Typed shapes of the Solr admin JSON payloads.
//!
//! Solr changed several of these payloads between releases. Where one
//! concept has more than one wire shape, a single enum carries every variant
//! and the decode order lives next to it.

mod admin;
mod jvm;
mod mbeans;

pub use admin::{AdminCoresStatus, CoreStatus, IndexStats};
pub use jvm::{JVM_FIELD_COUNT, JvmFields, JvmStatus, JvmValue, ValueCell};
pub use mbeans::{
    AutocommitMaxTime, CacheSection, CacheStats, CoreStats, LegacyCacheStats, LegacyRatio, MBean,
    MBeansResponse, QueryStats, ResponseHeader, Section, UpdateStats,
};

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
