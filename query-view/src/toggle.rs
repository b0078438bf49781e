//! Multi-select toggles and single-value setters over a query.
//!
//! Every function returns a new [`QueryParams`]; committing it (navigation)
//! is the caller's job.

use std::{fmt, str::FromStr};

use serde::Serialize;
use tracing::trace;

use crate::{
    params::QueryParams,
    state::{Currency, SortKey, decode_set, encode_set, keys},
};

/// The two multi-select filter keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiKey {
    Color,
    Shape,
}

impl MultiKey {
    pub const ALL: [MultiKey; 2] = [MultiKey::Color, MultiKey::Shape];

    pub fn as_str(self) -> &'static str {
        match self {
            MultiKey::Color => keys::COLOR,
            MultiKey::Shape => keys::SHAPE,
        }
    }
}

impl fmt::Display for MultiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Not one of the multi-select keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a multi-select filter key (expected `color` or `shape`)")]
pub struct UnknownKey(pub String);

impl FromStr for MultiKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            keys::COLOR => Ok(MultiKey::Color),
            keys::SHAPE => Ok(MultiKey::Shape),
            other => Err(UnknownKey(other.to_string())),
        }
    }
}

/// Flip membership of `value` in the set stored under `key`.
///
/// Existing values keep their order; a newly added value goes last.
pub fn toggle(query: &QueryParams, key: &str, value: &str) -> QueryParams {
    let mut selected = decode_set(query, key);
    let added = if selected.shift_remove(value) {
        false
    } else {
        selected.insert(value.to_string());
        true
    };
    trace!(key, value, added, "toggle");
    encode_set(query, key, &selected)
}

/// Remove every value stored under `key`.
pub fn clear(query: &QueryParams, key: &str) -> QueryParams {
    let mut next = query.clone();
    next.delete(key);
    next
}

pub fn set_sort(query: &QueryParams, sort: SortKey) -> QueryParams {
    let mut next = query.clone();
    next.set(keys::SORT, sort.as_str());
    next
}

pub fn set_currency(query: &QueryParams, currency: Currency) -> QueryParams {
    let mut next = query.clone();
    next.set(keys::CURRENCY, currency.code());
    next
}
