//! Payload shapes of `/admin/mbeans?stats=true`.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::value::RawValue;

use super::null_as_default;

/// Top-level mbeans document.
///
/// `solr-mbeans` is a flat array of alternating category tags and category
/// payloads. The payloads stay raw until the extractor has matched them to a
/// tag, because each category decodes into a different record.
#[derive(Debug, Deserialize)]
pub struct MBeansResponse {
    #[serde(rename = "responseHeader", default)]
    pub header: ResponseHeader,
    #[serde(rename = "solr-mbeans")]
    pub solr_mbeans: Vec<Box<RawValue>>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ResponseHeader {
    #[serde(rename = "QTime", default)]
    pub qtime: i64,
    #[serde(default)]
    pub status: i64,
}

/// One named component inside a category payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct MBean<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub class: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: T,
}

/// Component name to component record.
pub type Section<T> = HashMap<String, MBean<T>>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoreStats {
    #[serde(deserialize_with = "null_as_default")]
    pub deleted_docs: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_doc: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub num_docs: f64,
}

/// Request handler statistics.
///
/// The 15 and 5 minute rates exist under two key generations. Which one is
/// used is decided by [`crate::normalize::resolve_rates`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QueryStats {
    #[serde(rename = "15minRateReqsPerSecond")]
    pub rate_15min: Option<f64>,
    #[serde(rename = "5MinRateReqsPerSecond")]
    pub rate_5min: Option<f64>,
    #[serde(rename = "15minRateRequestsPerSecond")]
    pub legacy_rate_15min: Option<f64>,
    #[serde(rename = "5minRateRequestsPerSecond")]
    pub legacy_rate_5min: Option<f64>,
    #[serde(rename = "75thPcRequestTime")]
    #[serde(deserialize_with = "null_as_default")]
    pub p75_request_time: f64,
    #[serde(rename = "95thPcRequestTime")]
    #[serde(deserialize_with = "null_as_default")]
    pub p95_request_time: f64,
    #[serde(rename = "99thPcRequestTime")]
    #[serde(deserialize_with = "null_as_default")]
    pub p99_request_time: f64,
    #[serde(rename = "999thPcRequestTime")]
    #[serde(deserialize_with = "null_as_default")]
    pub p999_request_time: f64,
    #[serde(rename = "avgRequestsPerSecond")]
    #[serde(deserialize_with = "null_as_default")]
    pub avg_requests_per_second: f64,
    #[serde(rename = "avgTimePerRequest")]
    #[serde(deserialize_with = "null_as_default")]
    pub avg_time_per_request: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub errors: f64,
    #[serde(rename = "handlerStart")]
    #[serde(deserialize_with = "null_as_default")]
    pub handler_start: f64,
    #[serde(rename = "medianRequestTime")]
    #[serde(deserialize_with = "null_as_default")]
    pub median_request_time: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub requests: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub timeouts: f64,
    #[serde(rename = "totalTime")]
    #[serde(deserialize_with = "null_as_default")]
    pub total_time: f64,
}

/// `autocommit maxTime` is usually text such as `"15000ms"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AutocommitMaxTime {
    Text(String),
    Millis(f64),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateStats {
    #[serde(deserialize_with = "null_as_default")]
    pub adds: f64,
    #[serde(rename = "autocommit maxDocs")]
    #[serde(deserialize_with = "null_as_default")]
    pub autocommit_max_docs: f64,
    #[serde(rename = "autocommit maxTime")]
    pub autocommit_max_time: Option<AutocommitMaxTime>,
    #[serde(deserialize_with = "null_as_default")]
    pub autocommits: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub commits: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub cumulative_adds: f64,
    #[serde(rename = "cumulative_deletesById")]
    #[serde(deserialize_with = "null_as_default")]
    pub cumulative_deletes_by_id: f64,
    #[serde(rename = "cumulative_deletesByQuery")]
    #[serde(deserialize_with = "null_as_default")]
    pub cumulative_deletes_by_query: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub cumulative_errors: f64,
    #[serde(rename = "deletesById")]
    #[serde(deserialize_with = "null_as_default")]
    pub deletes_by_id: f64,
    #[serde(rename = "deletesByQuery")]
    #[serde(deserialize_with = "null_as_default")]
    pub deletes_by_query: f64,
    #[serde(rename = "docsPending")]
    #[serde(deserialize_with = "null_as_default")]
    pub docs_pending: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub errors: f64,
    #[serde(rename = "expungeDeletes")]
    #[serde(deserialize_with = "null_as_default")]
    pub expunge_deletes: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub optimizes: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub rollbacks: f64,
    #[serde(rename = "soft autocommits")]
    #[serde(deserialize_with = "null_as_default")]
    pub soft_autocommits: f64,
}

/// Searcher cache statistics, generic over the representation of the two
/// hit ratio fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, bound(deserialize = "R: Deserialize<'de> + Default"))]
pub struct CacheStats<R = f64> {
    #[serde(deserialize_with = "null_as_default")]
    pub cumulative_evictions: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub cumulative_hitratio: R,
    #[serde(deserialize_with = "null_as_default")]
    pub cumulative_hits: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub cumulative_inserts: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub cumulative_lookups: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub evictions: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub hitratio: R,
    #[serde(deserialize_with = "null_as_default")]
    pub hits: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub inserts: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lookups: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub size: f64,
    #[serde(rename = "warmupTime")]
    #[serde(deserialize_with = "null_as_default")]
    pub warmup_time: f64,
}

/// Hit ratio as old servers report it: usually text such as `"0.95"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LegacyRatio {
    Text(String),
    Number(f64),
}

pub type LegacyCacheStats = CacheStats<Option<LegacyRatio>>;

/// CACHE category in whichever shape the server produced.
#[derive(Debug, Clone)]
pub enum CacheSection {
    /// Ratios are JSON numbers.
    Modern(Section<CacheStats<f64>>),
    /// Ratios are strings that still need parsing.
    Legacy(Section<LegacyCacheStats>),
}

impl CacheSection {
    /// Decodes the modern shape first and falls back to the legacy one.
    ///
    /// On failure the error of the legacy attempt is returned, since it is
    /// the most permissive shape.
    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<Section<CacheStats<f64>>>(raw) {
            Ok(section) => Ok(CacheSection::Modern(section)),
            Err(_) => serde_json::from_str::<Section<LegacyCacheStats>>(raw).map(CacheSection::Legacy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_payload_array_stays_raw() {
        let body = r#"{"responseHeader":{"status":0,"QTime":3},"solr-mbeans":["CORE",{"core":{"class":"c","stats":{}}},"CACHE",{}]}"#;
        let resp: MBeansResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.header.qtime, 3);
        assert_eq!(resp.solr_mbeans.len(), 4);
        assert_eq!(resp.solr_mbeans[0].get(), r#""CORE""#);
        assert_eq!(resp.solr_mbeans[3].get(), "{}");
    }

    #[test]
    fn test_missing_mbeans_array_is_error() {
        assert!(serde_json::from_str::<MBeansResponse>(r#"{"responseHeader":{}}"#).is_err());
    }

    #[test]
    fn test_query_stats_rate_generations() {
        let modern: QueryStats =
            serde_json::from_str(r#"{"15minRateReqsPerSecond": 1.5, "5MinRateReqsPerSecond": 2.5}"#).unwrap();
        assert_eq!(modern.rate_15min, Some(1.5));
        assert_eq!(modern.rate_5min, Some(2.5));
        assert_eq!(modern.legacy_rate_15min, None);

        let legacy: QueryStats =
            serde_json::from_str(r#"{"15minRateRequestsPerSecond": 0.5, "5minRateRequestsPerSecond": 0.25}"#).unwrap();
        assert_eq!(legacy.rate_15min, None);
        assert_eq!(legacy.legacy_rate_15min, Some(0.5));
        assert_eq!(legacy.legacy_rate_5min, Some(0.25));
    }

    #[test]
    fn test_update_stats_keys_with_spaces() {
        let stats: UpdateStats = serde_json::from_str(
            r#"{"autocommit maxDocs": 10, "autocommit maxTime": "15000ms", "soft autocommits": 4, "cumulative_deletesById": 7}"#,
        )
        .unwrap();
        assert_eq!(stats.autocommit_max_docs, 10.0);
        assert_eq!(
            stats.autocommit_max_time,
            Some(AutocommitMaxTime::Text("15000ms".into()))
        );
        assert_eq!(stats.soft_autocommits, 4.0);
        assert_eq!(stats.cumulative_deletes_by_id, 7.0);
    }

    #[test]
    fn test_cache_section_prefers_modern_shape() {
        let raw = r#"{"filterCache":{"class":"solr.FastLRUCache","stats":{"hitratio":0.95,"lookups":20}}}"#;
        match CacheSection::decode(raw).unwrap() {
            CacheSection::Modern(s) => {
                assert_eq!(s["filterCache"].stats.hitratio, 0.95);
                assert_eq!(s["filterCache"].stats.lookups, 20.0);
            }
            CacheSection::Legacy(_) => panic!("expected modern shape"),
        }
    }

    #[test]
    fn test_cache_section_falls_back_to_legacy_shape() {
        let raw = r#"{"filterCache":{"class":"solr.FastLRUCache","stats":{"hitratio":"0.95","cumulative_hitratio":"0.90"}}}"#;
        match CacheSection::decode(raw).unwrap() {
            CacheSection::Legacy(s) => {
                let stats = &s["filterCache"].stats;
                assert_eq!(stats.hitratio, Some(LegacyRatio::Text("0.95".into())));
                assert_eq!(stats.cumulative_hitratio, Some(LegacyRatio::Text("0.90".into())));
            }
            CacheSection::Modern(_) => panic!("expected legacy shape"),
        }
    }

    #[test]
    fn test_cache_section_neither_shape() {
        assert!(CacheSection::decode(r#"{"filterCache":{"stats":{"lookups":"lots"}}}"#).is_err());
        assert!(CacheSection::decode("[]").is_err());
    }

    #[test]
    fn test_null_stats_are_default() {
        let section: Section<CoreStats> =
            serde_json::from_str(r#"{"searcher":{"class":null,"stats":null}}"#).unwrap();
        assert_eq!(section["searcher"].class, "");
        assert_eq!(section["searcher"].stats.num_docs, 0.0);
    }

    #[test]
    fn test_null_numeric_fields_are_zero() {
        let core: Section<CoreStats> = serde_json::from_str(
            r#"{"searcher":{"class":"c","stats":{"numDocs":null,"maxDoc":12}}}"#,
        )
        .unwrap();
        assert_eq!(core["searcher"].stats.num_docs, 0.0);
        assert_eq!(core["searcher"].stats.max_doc, 12.0);

        let query: Section<QueryStats> = serde_json::from_str(
            r#"{"/select":{"class":"s","stats":{"avgTimePerRequest":null,"requests":3}}}"#,
        )
        .unwrap();
        assert_eq!(query["/select"].stats.avg_time_per_request, 0.0);
        assert_eq!(query["/select"].stats.requests, 3.0);
    }

    #[test]
    fn test_null_cache_ratio_keeps_modern_shape() {
        let raw = r#"{"filterCache":{"class":"solr.FastLRUCache","stats":{"hitratio":null,"size":null,"lookups":20}}}"#;
        match CacheSection::decode(raw).unwrap() {
            CacheSection::Modern(s) => {
                assert_eq!(s["filterCache"].stats.hitratio, 0.0);
                assert_eq!(s["filterCache"].stats.size, 0.0);
            }
            CacheSection::Legacy(_) => panic!("expected modern shape"),
        }
    }
}
