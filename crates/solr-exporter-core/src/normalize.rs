//! Field reconciliation across Solr versions.
//!
//! Pure functions: each takes a raw field (possibly absent, differently
//! typed or under another key) and returns one canonical number.

use std::borrow::Cow;
use std::num::ParseFloatError;

use chrono::NaiveDateTime;

use crate::schema::{AutocommitMaxTime, LegacyRatio};

/// Searcher-scoped prefixes some servers nest into cache stat names.
pub const CACHE_KEY_PREFIXES: [&str; 5] = [
    "CACHE.searcher.perSegFilter.",
    "CACHE.searcher.queryResultCache.",
    "CACHE.searcher.fieldValueCache.",
    "CACHE.searcher.filterCache.",
    "CACHE.searcher.documentCache.",
];

const NAN_TOKEN: &str = r#""NaN""#;
const ZERO_TOKEN: &str = "0.0";

/// Replaces the `"NaN"` string the server emits for undefined rates with `0.0`.
///
/// Only object values are rewritten: the token must follow a `:`, possibly
/// separated by whitespace.
pub fn rewrite_nan(raw: &str) -> Cow<'_, str> {
    let is_value = |at: usize| raw[..at].trim_end().ends_with(':');
    if !raw.match_indices(NAN_TOKEN).any(|(at, _)| is_value(at)) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len());
    let mut last = 0;
    for (at, _) in raw.match_indices(NAN_TOKEN) {
        if is_value(at) {
            out.push_str(&raw[last..at]);
            out.push_str(ZERO_TOKEN);
            last = at + NAN_TOKEN.len();
        }
    }
    out.push_str(&raw[last..]);
    Cow::Owned(out)
}

/// Prepares a raw CACHE payload for decoding: prefix stripping plus NaN rewrite.
pub fn prepare_cache_payload(raw: &str) -> String {
    let mut out = raw.to_string();
    for prefix in CACHE_KEY_PREFIXES {
        if out.contains(prefix) {
            out = out.replace(prefix, "");
        }
    }
    rewrite_nan(&out).into_owned()
}

/// Picks the 15 and 5 minute request rates.
///
/// When neither preferred key is present the legacy keys are used, absent
/// legacy keys count as zero. Otherwise the preferred keys are used and a
/// missing one is zero; generations are never mixed.
pub fn resolve_rates(
    preferred_15min: Option<f64>,
    preferred_5min: Option<f64>,
    legacy_15min: Option<f64>,
    legacy_5min: Option<f64>,
) -> (f64, f64) {
    if preferred_15min.is_none() && preferred_5min.is_none() {
        (legacy_15min.unwrap_or(0.0), legacy_5min.unwrap_or(0.0))
    } else {
        (preferred_15min.unwrap_or(0.0), preferred_5min.unwrap_or(0.0))
    }
}

/// Parses `autocommit maxTime`, e.g. `"15000ms"` into `15000`.
///
/// Text drops its two-character unit suffix. Text of two characters or less,
/// or text that does not parse as an integer, yields zero.
pub fn parse_autocommit_max_time(value: Option<&AutocommitMaxTime>) -> f64 {
    match value {
        None => 0.0,
        Some(AutocommitMaxTime::Millis(ms)) => *ms,
        Some(AutocommitMaxTime::Text(text)) => {
            if text.len() <= 2 {
                return 0.0;
            }
            text.get(..text.len() - 2)
                .and_then(|digits| digits.parse::<i64>().ok())
                .map(|v| v as f64)
                .unwrap_or(0.0)
        }
    }
}

/// Parses a legacy ratio field. Absent means zero.
pub fn parse_ratio(value: Option<&LegacyRatio>) -> Result<f64, ParseFloatError> {
    match value {
        None => Ok(0.0),
        Some(LegacyRatio::Number(n)) => Ok(*n),
        Some(LegacyRatio::Text(text)) => text.trim().parse::<f64>(),
    }
}

pub fn ms_to_seconds(ms: f64) -> f64 {
    ms / 1000.0
}

/// Parses a replication timestamp such as `Tue Mar 14 10:20:30 UTC 2023`
/// into UNIX seconds.
///
/// The zone name is read as UTC. Absent or unparseable text yields 0.0.
pub fn parse_replication_timestamp(text: Option<&str>) -> f64 {
    let Some(text) = text else {
        return 0.0;
    };
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 6 {
        return 0.0;
    }
    // Weekday, month, day, clock and year; the zone name is skipped.
    let without_zone = format!(
        "{} {} {} {} {}",
        tokens[0], tokens[1], tokens[2], tokens[3], tokens[5]
    );
    NaiveDateTime::parse_from_str(&without_zone, "%a %b %d %H:%M:%S %Y")
        .map(|dt| dt.and_utc().timestamp() as f64)
        .unwrap_or(0.0)
}
