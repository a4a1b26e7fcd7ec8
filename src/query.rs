//! Search params to URL query string.
//!
//! Fields left at their zero value (`false`, `0`, `""`) are skipped during
//! serialization, so "explicitly zero" and "unset" produce the same query.
//! That mirrors how the upstream API has always been queried and is kept
//! as-is.

use serde::Serialize;

use crate::error::Result;

pub fn is_false(value: &bool) -> bool {
    !*value
}

pub fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// Serialize a params struct into `key=value&...` form, keys in field order.
pub fn to_query_string<P: Serialize>(params: &P) -> Result<String> {
    Ok(serde_urlencoded::to_string(params)?)
}

/// Join an endpoint and an already-encoded query. An empty query yields the
/// bare endpoint.
pub fn build_url(endpoint: &str, query: &str) -> String {
    if query.is_empty() {
        endpoint.to_string()
    } else {
        format!("{}?{}", endpoint, query)
    }
}
