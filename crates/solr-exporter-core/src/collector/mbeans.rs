//! Per-core mbeans statistics extraction.
//!
//! The mbeans document carries its categories as an ordered array of
//! `tag, payload, tag, payload, ...`. Extraction runs in two phases: every
//! category is decoded into [`HandlerSample`] rows first, and only a fully
//! decoded [`Extraction`] is handed to emission. A structural problem in a
//! required category therefore leaves no partial rows behind.

use std::collections::HashMap;

use serde_json::value::RawValue;

use crate::normalize::{
    parse_autocommit_max_time, parse_ratio, prepare_cache_payload, resolve_rates, rewrite_nan,
};
use crate::schema::{
    CacheSection, CacheStats, CoreStats, LegacyCacheStats, MBeansResponse, QueryStats, Section,
    UpdateStats,
};

/// Marker of per-searcher and other transient component instances.
const INTERNAL_MARKER: &str = "@";

/// Query handler names that are administrative endpoints.
const EXCLUDED_QUERY_HANDLERS: [&str; 4] = [
    "/admin",
    "/debug/dump",
    "/schema",
    "org.apache.solr.handler.admin",
];

/// Field cache implementations reported in CACHE but not handler caches.
const EXCLUDED_CACHE_CLASSES: [&str; 2] = [
    "org.apache.solr.search.SolrFieldCacheMBean",
    "org.apache.solr.search.SolrFieldCacheBean",
];

/// mbeans category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Core,
    Query,
    Update,
    Cache,
}

impl Category {
    /// Matches a tag, accepting the legacy `...HANDLER` suffix.
    ///
    /// Unknown tags (`OTHER`, `HIGHLIGHTER`, ...) return `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let base = tag.strip_suffix("HANDLER").unwrap_or(tag);
        match base {
            "CORE" => Some(Category::Core),
            "QUERY" => Some(Category::Query),
            "UPDATE" => Some(Category::Update),
            "CACHE" => Some(Category::Cache),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Core => "CORE",
            Category::Query => "QUERY",
            Category::Update => "UPDATE",
            Category::Cache => "CACHE",
        }
    }
}

/// Problems found while extracting one core.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// Document or tag/payload array is malformed.
    Malformed(String),
    /// Required category is absent.
    MissingSection(Category),
    /// Category payload matched no known shape.
    SectionDecode { category: Category, message: String },
    /// One field could not be coerced; it was reported as zero.
    Field {
        handler: String,
        field: &'static str,
        message: String,
    },
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::Malformed(msg) => write!(f, "malformed mbeans document: {}", msg),
            ExtractError::MissingSection(c) => write!(f, "mbeans category {} not found", c.as_str()),
            ExtractError::SectionDecode { category, message } => {
                write!(f, "failed to decode {} category: {}", category.as_str(), message)
            }
            ExtractError::Field {
                handler,
                field,
                message,
            } => write!(f, "{} of {}: {}", field, handler, message),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Values of one handler, aligned with a descriptor table.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerSample {
    pub handler: String,
    pub class: String,
    pub values: Vec<f64>,
}

/// Decoded statistics of one core.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub core: Vec<HandlerSample>,
    pub query: Vec<HandlerSample>,
    pub update: Vec<HandlerSample>,
    pub cache: Vec<HandlerSample>,
    /// Non-fatal problems; the affected values were reported as zero or skipped.
    pub errors: Vec<ExtractError>,
}

/// Extracts every category of one mbeans document.
///
/// Returns `Err` when the document or a required category (CORE, QUERY,
/// UPDATE) is structurally broken. CACHE problems are recorded in
/// [`Extraction::errors`].
pub fn extract_mbeans(body: &[u8]) -> Result<Extraction, ExtractError> {
    let document: MBeansResponse =
        serde_json::from_slice(body).map_err(|e| ExtractError::Malformed(e.to_string()))?;
    let sections = pair_sections(&document.solr_mbeans)?;

    let required = |category: Category| {
        sections
            .get(&category)
            .copied()
            .ok_or(ExtractError::MissingSection(category))
    };

    let mut extraction = Extraction {
        core: extract_core(required(Category::Core)?)?,
        query: extract_query(required(Category::Query)?)?,
        update: extract_update(required(Category::Update)?)?,
        ..Default::default()
    };

    match sections.get(&Category::Cache) {
        Some(raw) => match extract_cache(raw, &mut extraction.errors) {
            Ok(rows) => extraction.cache = rows,
            Err(e) => extraction.errors.push(e),
        },
        None => extraction
            .errors
            .push(ExtractError::MissingSection(Category::Cache)),
    }

    Ok(extraction)
}

/// Maps each known category tag to the payload that follows it.
///
/// The array must have even length and every even element must be a string.
/// When a category repeats, the first occurrence wins.
fn pair_sections(items: &[Box<RawValue>]) -> Result<HashMap<Category, &str>, ExtractError> {
    if items.len() % 2 != 0 {
        return Err(ExtractError::Malformed(format!(
            "solr-mbeans has odd length {}",
            items.len()
        )));
    }
    let mut sections = HashMap::new();
    for (idx, pair) in items.chunks_exact(2).enumerate() {
        let tag: String = serde_json::from_str(pair[0].get()).map_err(|_| {
            ExtractError::Malformed(format!(
                "solr-mbeans element {} is not a category name: {}",
                idx * 2,
                pair[0].get()
            ))
        })?;
        if let Some(category) = Category::from_tag(&tag) {
            sections.entry(category).or_insert(pair[1].get());
        }
    }
    Ok(sections)
}

fn decode_section<T>(category: Category, raw: &str) -> Result<Section<T>, ExtractError>
where
    T: serde::de::DeserializeOwned + Default,
{
    serde_json::from_str(raw).map_err(|e| ExtractError::SectionDecode {
        category,
        message: e.to_string(),
    })
}

fn sorted<T>(mut rows: Vec<T>, key: impl Fn(&T) -> &str) -> Vec<T> {
    rows.sort_by(|a, b| key(a).cmp(key(b)));
    rows
}

fn extract_core(raw: &str) -> Result<Vec<HandlerSample>, ExtractError> {
    let section: Section<CoreStats> = decode_section(Category::Core, raw)?;
    let rows = section
        .into_iter()
        .filter(|(name, _)| !name.contains(INTERNAL_MARKER))
        .map(|(handler, bean)| HandlerSample {
            handler,
            class: bean.class,
            values: vec![bean.stats.num_docs, bean.stats.deleted_docs, bean.stats.max_doc],
        })
        .collect();
    Ok(sorted(rows, |r| &r.handler))
}

fn is_excluded_query_handler(name: &str) -> bool {
    name.contains(INTERNAL_MARKER) || EXCLUDED_QUERY_HANDLERS.iter().any(|p| name.contains(p))
}

fn query_values(stats: &QueryStats) -> Vec<f64> {
    let (rate_15min, rate_5min) = resolve_rates(
        stats.rate_15min,
        stats.rate_5min,
        stats.legacy_rate_15min,
        stats.legacy_rate_5min,
    );
    vec![
        rate_15min,
        rate_5min,
        stats.p75_request_time,
        stats.p95_request_time,
        stats.p99_request_time,
        stats.p999_request_time,
        stats.avg_requests_per_second,
        stats.avg_time_per_request,
        stats.errors,
        stats.handler_start,
        stats.median_request_time,
        stats.requests,
        stats.timeouts,
        stats.total_time,
    ]
}

fn extract_query(raw: &str) -> Result<Vec<HandlerSample>, ExtractError> {
    let section: Section<QueryStats> = decode_section(Category::Query, &rewrite_nan(raw))?;
    let rows = section
        .into_iter()
        .filter(|(name, _)| !is_excluded_query_handler(name))
        .map(|(handler, bean)| HandlerSample {
            values: query_values(&bean.stats),
            handler,
            class: bean.class,
        })
        .collect();
    Ok(sorted(rows, |r| &r.handler))
}

fn update_values(stats: &UpdateStats) -> Vec<f64> {
    vec![
        stats.adds,
        stats.autocommit_max_docs,
        parse_autocommit_max_time(stats.autocommit_max_time.as_ref()),
        stats.autocommits,
        stats.commits,
        stats.cumulative_adds,
        stats.cumulative_deletes_by_id,
        stats.cumulative_deletes_by_query,
        stats.cumulative_errors,
        stats.deletes_by_id,
        stats.deletes_by_query,
        stats.docs_pending,
        stats.errors,
        stats.expunge_deletes,
        stats.optimizes,
        stats.rollbacks,
        stats.soft_autocommits,
    ]
}

fn extract_update(raw: &str) -> Result<Vec<HandlerSample>, ExtractError> {
    let section: Section<UpdateStats> = decode_section(Category::Update, raw)?;
    let rows = section
        .into_iter()
        .filter(|(name, _)| !name.contains(INTERNAL_MARKER) && !name.starts_with('/'))
        .map(|(handler, bean)| HandlerSample {
            values: update_values(&bean.stats),
            handler,
            class: bean.class,
        })
        .collect();
    Ok(sorted(rows, |r| &r.handler))
}

fn cache_values(stats: &CacheStats<f64>) -> Vec<f64> {
    vec![
        stats.cumulative_evictions,
        stats.cumulative_hitratio,
        stats.cumulative_hits,
        stats.cumulative_inserts,
        stats.cumulative_lookups,
        stats.evictions,
        stats.hitratio,
        stats.hits,
        stats.inserts,
        stats.lookups,
        stats.size,
        stats.warmup_time,
    ]
}

/// Legacy stats with both ratios coerced; failures are recorded and read as zero.
fn coerce_legacy(
    handler: &str,
    stats: &LegacyCacheStats,
    errors: &mut Vec<ExtractError>,
) -> Vec<f64> {
    let mut ratio = |field: &'static str, value| {
        parse_ratio(value).unwrap_or_else(|e| {
            errors.push(ExtractError::Field {
                handler: handler.to_string(),
                field,
                message: e.to_string(),
            });
            0.0
        })
    };
    let hitratio = ratio("hitratio", stats.hitratio.as_ref());
    let cumulative_hitratio = ratio("cumulative_hitratio", stats.cumulative_hitratio.as_ref());
    let numeric = CacheStats::<f64> {
        cumulative_evictions: stats.cumulative_evictions,
        cumulative_hitratio,
        cumulative_hits: stats.cumulative_hits,
        cumulative_inserts: stats.cumulative_inserts,
        cumulative_lookups: stats.cumulative_lookups,
        evictions: stats.evictions,
        hitratio,
        hits: stats.hits,
        inserts: stats.inserts,
        lookups: stats.lookups,
        size: stats.size,
        warmup_time: stats.warmup_time,
    };
    cache_values(&numeric)
}

fn is_excluded_cache(name: &str, class: &str) -> bool {
    name.contains(INTERNAL_MARKER) || EXCLUDED_CACHE_CLASSES.contains(&class)
}

fn extract_cache(
    raw: &str,
    errors: &mut Vec<ExtractError>,
) -> Result<Vec<HandlerSample>, ExtractError> {
    let prepared = prepare_cache_payload(raw);
    let section = CacheSection::decode(&prepared).map_err(|e| ExtractError::SectionDecode {
        category: Category::Cache,
        message: e.to_string(),
    })?;
    let rows = match section {
        CacheSection::Modern(section) => section
            .into_iter()
            .filter(|(name, bean)| !is_excluded_cache(name, &bean.class))
            .map(|(handler, bean)| HandlerSample {
                values: cache_values(&bean.stats),
                handler,
                class: bean.class,
            })
            .collect(),
        CacheSection::Legacy(section) => section
            .into_iter()
            .filter(|(name, bean)| !is_excluded_cache(name, &bean.class))
            .map(|(handler, bean)| HandlerSample {
                values: coerce_legacy(&handler, &bean.stats, errors),
                handler,
                class: bean.class,
            })
            .collect(),
    };
    Ok(sorted(rows, |r| &r.handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::scenarios;

    fn doc(items: &str) -> Vec<u8> {
        format!(r#"{{"responseHeader":{{"status":0,"QTime":1}},"solr-mbeans":[{}]}}"#, items).into_bytes()
    }

    const MINIMAL: &str = r#""CORE",{},"QUERY",{},"UPDATE",{},"CACHE",{}"#;

    fn find<'a>(rows: &'a [HandlerSample], handler: &str) -> Option<&'a HandlerSample> {
        rows.iter().find(|r| r.handler == handler)
    }

    #[test]
    fn test_category_tags() {
        assert_eq!(Category::from_tag("CORE"), Some(Category::Core));
        assert_eq!(Category::from_tag("QUERYHANDLER"), Some(Category::Query));
        assert_eq!(Category::from_tag("UPDATEHANDLER"), Some(Category::Update));
        assert_eq!(Category::from_tag("CACHE"), Some(Category::Cache));
        assert_eq!(Category::from_tag("OTHER"), None);
        assert_eq!(Category::from_tag("HANDLER"), None);
        assert_eq!(Category::from_tag("query"), None);
    }

    #[test]
    fn test_minimal_document() {
        let ex = extract_mbeans(&doc(MINIMAL)).unwrap();
        assert!(ex.core.is_empty());
        assert!(ex.query.is_empty());
        assert!(ex.errors.is_empty());
    }

    #[test]
    fn test_odd_length_array() {
        let err = extract_mbeans(&doc(r#""CORE",{},"QUERY""#)).unwrap_err();
        assert!(matches!(err, ExtractError::Malformed(_)));
    }

    #[test]
    fn test_non_string_tag() {
        let err = extract_mbeans(&doc(r#"{},"CORE","QUERY",{}"#)).unwrap_err();
        assert!(matches!(err, ExtractError::Malformed(_)));
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(
            extract_mbeans(b"<html>").unwrap_err(),
            ExtractError::Malformed(_)
        ));
    }

    #[test]
    fn test_unknown_tags_skipped() {
        let ex = extract_mbeans(&doc(&format!(r#""OTHER",[1,2],{}"#, MINIMAL))).unwrap();
        assert!(ex.errors.is_empty());
    }

    #[test]
    fn test_missing_required_sections() {
        let err = extract_mbeans(&doc(r#""CORE",{},"UPDATE",{},"CACHE",{}"#)).unwrap_err();
        assert_eq!(err, ExtractError::MissingSection(Category::Query));
        let err = extract_mbeans(&doc(r#""QUERY",{},"UPDATE",{},"CACHE",{}"#)).unwrap_err();
        assert_eq!(err, ExtractError::MissingSection(Category::Core));
        let err = extract_mbeans(&doc(r#""CORE",{},"QUERY",{},"CACHE",{}"#)).unwrap_err();
        assert_eq!(err, ExtractError::MissingSection(Category::Update));
    }

    #[test]
    fn test_missing_cache_is_not_fatal() {
        let ex = extract_mbeans(&doc(r#""CORE",{},"QUERY",{},"UPDATE",{}"#)).unwrap();
        assert_eq!(ex.errors, vec![ExtractError::MissingSection(Category::Cache)]);
    }

    #[test]
    fn test_malformed_query_aborts() {
        let items = r#""CORE",{"searcher":{"class":"S","stats":{"numDocs":1}}},"QUERY",{"/select":{"class":"X","stats":{"requests":"many"}}},"UPDATE",{},"CACHE",{}"#;
        let err = extract_mbeans(&doc(items)).unwrap_err();
        assert!(matches!(err, ExtractError::SectionDecode { category: Category::Query, .. }));
    }

    #[test]
    fn test_first_duplicate_tag_wins() {
        let items = r#""CORE",{"a":{"class":"A","stats":{"numDocs":1}}},"CORE",{"b":{"class":"B","stats":{"numDocs":2}}},"QUERY",{},"UPDATE",{},"CACHE",{}"#;
        let ex = extract_mbeans(&doc(items)).unwrap();
        assert_eq!(ex.core.len(), 1);
        assert_eq!(ex.core[0].handler, "a");
    }

    #[test]
    fn test_core_values_and_internal_marker() {
        let items = r#""CORE",{"searcher":{"class":"S","stats":{"numDocs":10,"deletedDocs":2,"maxDoc":12}},"Searcher@5f main":{"class":"S","stats":{"numDocs":10}}},"QUERY",{},"UPDATE",{},"CACHE",{}"#;
        let ex = extract_mbeans(&doc(items)).unwrap();
        assert_eq!(
            ex.core,
            vec![HandlerSample {
                handler: "searcher".into(),
                class: "S".into(),
                values: vec![10.0, 2.0, 12.0],
            }]
        );
    }

    #[test]
    fn test_query_exclusions() {
        let items = r#""CORE",{},"QUERY",{
            "/select":{"class":"SearchHandler","stats":{"requests":5}},
            "/admin/ping":{"class":"PingRequestHandler","stats":{"requests":1}},
            "/debug/dump":{"class":"DumpRequestHandler","stats":{}},
            "/schema":{"class":"SchemaHandler","stats":{}},
            "org.apache.solr.handler.admin.LukeRequestHandler":{"class":"L","stats":{}},
            "/select@1":{"class":"SearchHandler","stats":{}}
        },"UPDATE",{},"CACHE",{}"#;
        let ex = extract_mbeans(&doc(items)).unwrap();
        let names: Vec<&str> = ex.query.iter().map(|r| r.handler.as_str()).collect();
        assert_eq!(names, vec!["/select"]);
        assert_eq!(ex.query[0].values[11], 5.0);
    }

    #[test]
    fn test_query_nan_is_zero() {
        let items = r#""CORE",{},"QUERY",{"/select":{"class":"X","stats":{"15minRateReqsPerSecond":"NaN","5MinRateReqsPerSecond":2.0,"avgTimePerRequest":"NaN"}}},"UPDATE",{},"CACHE",{}"#;
        let ex = extract_mbeans(&doc(items)).unwrap();
        let values = &ex.query[0].values;
        assert_eq!(values[0], 0.0);
        assert_eq!(values[1], 2.0);
        assert_eq!(values[7], 0.0);
    }

    #[test]
    fn test_null_fields_keep_core() {
        let items = r#""CORE",{"searcher":{"class":"S","stats":{"numDocs":null,"maxDoc":12}}},"QUERY",{"/select":{"class":"X","stats":{"avgTimePerRequest":null,"requests":5}}},"UPDATE",{},"CACHE",{}"#;
        let ex = extract_mbeans(&doc(items)).unwrap();
        assert_eq!(ex.core[0].values, vec![0.0, 0.0, 12.0]);
        let select = find(&ex.query, "/select").unwrap();
        assert_eq!(select.values[7], 0.0);
        assert_eq!(select.values[11], 5.0);
        assert!(ex.errors.is_empty());
    }

    #[test]
    fn test_query_legacy_rates() {
        let items = r#""CORE",{},"QUERYHANDLER",{"/select":{"class":"X","stats":{"15minRateRequestsPerSecond":0.5,"5minRateRequestsPerSecond":0.25}}},"UPDATEHANDLER",{},"CACHE",{}"#;
        let ex = extract_mbeans(&doc(items)).unwrap();
        assert_eq!(&ex.query[0].values[..2], &[0.5, 0.25]);
    }

    #[test]
    fn test_query_modern_rates_take_precedence() {
        let items = r#""CORE",{},"QUERY",{"/select":{"class":"X","stats":{"15minRateReqsPerSecond":3.0,"5MinRateReqsPerSecond":4.0,"15minRateRequestsPerSecond":0.5,"5minRateRequestsPerSecond":0.25}}},"UPDATE",{},"CACHE",{}"#;
        let ex = extract_mbeans(&doc(items)).unwrap();
        assert_eq!(&ex.query[0].values[..2], &[3.0, 4.0]);
    }

    #[test]
    fn test_update_exclusions_and_max_time() {
        let items = r#""CORE",{},"QUERY",{},"UPDATE",{
            "updateHandler":{"class":"DirectUpdateHandler2","stats":{"autocommit maxTime":"1500ms","commits":3}},
            "/update":{"class":"UpdateRequestHandler","stats":{}},
            "updateHandler@2":{"class":"DirectUpdateHandler2","stats":{}}
        },"CACHE",{}"#;
        let ex = extract_mbeans(&doc(items)).unwrap();
        assert_eq!(ex.update.len(), 1);
        assert_eq!(ex.update[0].handler, "updateHandler");
        assert_eq!(ex.update[0].values.len(), 17);
        assert_eq!(ex.update[0].values[2], 1500.0);
        assert_eq!(ex.update[0].values[4], 3.0);
    }

    #[test]
    fn test_update_short_max_time() {
        let items = r#""CORE",{},"QUERY",{},"UPDATE",{"updateHandler":{"class":"U","stats":{"autocommit maxTime":"ms"}}},"CACHE",{}"#;
        let ex = extract_mbeans(&doc(items)).unwrap();
        assert_eq!(ex.update[0].values[2], 0.0);
    }

    #[test]
    fn test_cache_numeric_and_string_ratio() {
        let numeric = r#""CORE",{},"QUERY",{},"UPDATE",{},"CACHE",{"filterCache":{"class":"C","stats":{"hitratio":0.95}}}"#;
        let text = r#""CORE",{},"QUERY",{},"UPDATE",{},"CACHE",{"filterCache":{"class":"C","stats":{"hitratio":"0.95"}}}"#;
        for items in [numeric, text] {
            let ex = extract_mbeans(&doc(items)).unwrap();
            assert_eq!(ex.cache[0].values[6], 0.95);
            assert!(ex.errors.is_empty());
        }
    }

    #[test]
    fn test_cache_bad_ratio_recorded() {
        let items = r#""CORE",{},"QUERY",{},"UPDATE",{},"CACHE",{"filterCache":{"class":"C","stats":{"hitratio":"n/a","cumulative_hitratio":"0.5","lookups":4}}}"#;
        let ex = extract_mbeans(&doc(items)).unwrap();
        let values = &ex.cache[0].values;
        assert_eq!(values[6], 0.0);
        assert_eq!(values[1], 0.5);
        assert_eq!(values[9], 4.0);
        assert_eq!(ex.errors.len(), 1);
        assert!(matches!(&ex.errors[0], ExtractError::Field { field: "hitratio", .. }));
    }

    #[test]
    fn test_cache_undecodable_is_not_fatal() {
        let items = r#""CORE",{"searcher":{"class":"S","stats":{"numDocs":1}}},"QUERY",{},"UPDATE",{},"CACHE",{"filterCache":{"class":"C","stats":{"lookups":"many"}}}"#;
        let ex = extract_mbeans(&doc(items)).unwrap();
        assert_eq!(ex.core.len(), 1);
        assert!(ex.cache.is_empty());
        assert!(matches!(
            ex.errors[0],
            ExtractError::SectionDecode { category: Category::Cache, .. }
        ));
    }

    #[test]
    fn test_cache_exclusions() {
        let items = r#""CORE",{},"QUERY",{},"UPDATE",{},"CACHE",{
            "fieldCache":{"class":"org.apache.solr.search.SolrFieldCacheMBean","stats":{}},
            "fieldCacheBean":{"class":"org.apache.solr.search.SolrFieldCacheBean","stats":{}},
            "filterCache@3":{"class":"C","stats":{}},
            "documentCache":{"class":"C","stats":{"size":7}}
        }"#;
        let ex = extract_mbeans(&doc(items)).unwrap();
        assert_eq!(ex.cache.len(), 1);
        assert_eq!(ex.cache[0].handler, "documentCache");
        assert_eq!(ex.cache[0].values[10], 7.0);
    }

    #[test]
    fn test_cache_prefixed_keys() {
        let items = r#""CORE",{},"QUERY",{},"UPDATE",{},"CACHE",{"queryResultCache":{"class":"C","stats":{"CACHE.searcher.queryResultCache.hitratio":"NaN","CACHE.searcher.queryResultCache.lookups":9}}}"#;
        let ex = extract_mbeans(&doc(items)).unwrap();
        assert_eq!(ex.cache[0].values[6], 0.0);
        assert_eq!(ex.cache[0].values[9], 9.0);
        assert!(ex.errors.is_empty());
    }

    #[test]
    fn test_legacy_fixture() {
        let ex = extract_mbeans(scenarios::LEGACY_MBEANS.as_bytes()).unwrap();
        assert!(ex.errors.is_empty(), "{:?}", ex.errors);
        assert_eq!(find(&ex.core, "searcher").unwrap().values, vec![100.0, 20.0, 120.0]);
        let select = find(&ex.query, "/select").unwrap();
        assert_eq!(&select.values[..2], &[0.5, 0.25]);
        assert!(find(&ex.query, "/admin/ping").is_none());
        assert_eq!(find(&ex.update, "updateHandler").unwrap().values[2], 15000.0);
        assert_eq!(find(&ex.cache, "filterCache").unwrap().values[6], 0.95);
        assert!(find(&ex.cache, "fieldCache").is_none());
    }

    #[test]
    fn test_modern_fixture() {
        let ex = extract_mbeans(scenarios::MODERN_MBEANS.as_bytes()).unwrap();
        assert!(ex.errors.is_empty(), "{:?}", ex.errors);
        let select = find(&ex.query, "/select").unwrap();
        assert_eq!(&select.values[..2], &[1.5, 2.5]);
        let filter = find(&ex.cache, "filterCache").unwrap();
        assert_eq!(filter.values[6], 0.0);
        assert_eq!(filter.values[9], 20.0);
    }
}
