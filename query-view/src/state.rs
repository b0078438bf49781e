//! Typed filter/sort state decoded from query parameters.
//!
//! Decoding is total: absent or malformed values fall back to defaults, so a
//! [`FilterState`] is always complete.

use std::{fmt, ops::RangeInclusive};

use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

use crate::{params::QueryParams, range::PriceBounds};

/// Query parameter names.
pub mod keys {
    pub const MIN: &str = "min";
    pub const MAX: &str = "max";
    pub const COLOR: &str = "color";
    pub const SHAPE: &str = "shape";
    pub const SORT: &str = "sort";
    pub const CURRENCY: &str = "currency";
}

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SortKey {
    /// Catalog order.
    #[default]
    #[serde(rename = "rec")]
    Recommended,
    #[serde(rename = "price-asc")]
    PriceAscending,
    #[serde(rename = "price-desc")]
    PriceDescending,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [
        SortKey::Recommended,
        SortKey::PriceAscending,
        SortKey::PriceDescending,
    ];

    /// Wire value used in the `sort` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Recommended => "rec",
            SortKey::PriceAscending => "price-asc",
            SortKey::PriceDescending => "price-desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Recommended => "Recommended",
            SortKey::PriceAscending => "Price: Low to High",
            SortKey::PriceDescending => "Price: High to Low",
        }
    }

    /// Decode a `sort` value. Unknown or absent values mean `Recommended`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("price-asc" | "price-ascending") => SortKey::PriceAscending,
            Some("price-desc" | "price-descending") => SortKey::PriceDescending,
            Some("rec" | "recommended") | None => SortKey::Recommended,
            Some(other) => {
                debug!(sort = other, "unknown sort key; using recommended");
                SortKey::Recommended
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display currency carried in the `currency` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Aed,
    Inr,
    Eur,
    Aud,
    Cad,
}

impl Currency {
    pub const ALL: [Currency; 6] = [
        Currency::Usd,
        Currency::Aed,
        Currency::Inr,
        Currency::Eur,
        Currency::Aud,
        Currency::Cad,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Aed => "AED",
            Currency::Inr => "INR",
            Currency::Eur => "EUR",
            Currency::Aud => "AUD",
            Currency::Cad => "CAD",
        }
    }

    /// Case-insensitive decode; unsupported codes mean `USD`.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return Currency::Usd;
        };
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(raw))
            .unwrap_or_default()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Every filter/sort selection of a listing page.
///
/// A price bound missing from the query is `None` and does not filter; the
/// slider still shows the configured default for it (see [`Self::slider`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub colors: IndexSet<String>,
    pub shapes: IndexSet<String>,
    pub sort: SortKey,
    pub currency: Currency,
}

impl FilterState {
    /// Decode the full state from a query.
    pub fn decode(query: &QueryParams) -> Self {
        let state = Self {
            min_price: decode_price(query.get(keys::MIN)),
            max_price: decode_price(query.get(keys::MAX)),
            colors: decode_set(query, keys::COLOR),
            shapes: decode_set(query, keys::SHAPE),
            sort: SortKey::parse(query.get(keys::SORT)),
            currency: Currency::parse(query.get(keys::CURRENCY)),
        };
        debug!(
            min = ?state.min_price,
            max = ?state.max_price,
            colors = state.colors.len(),
            shapes = state.shapes.len(),
            sort = %state.sort,
            "decoded filter state"
        );
        state
    }

    /// Inclusive price window products must fall into.
    pub fn price_window(&self) -> RangeInclusive<u64> {
        self.min_price.unwrap_or(0)..=self.max_price.unwrap_or(u64::MAX)
    }

    /// Slider handle positions: the query's bounds, else the defaults.
    pub fn slider(&self, bounds: &PriceBounds) -> (u64, u64) {
        (
            self.min_price.unwrap_or(bounds.default_min()),
            self.max_price.unwrap_or(bounds.default_max()),
        )
    }

    /// Write this state into a copy of `query`. Unrelated keys are kept;
    /// absent price bounds are removed.
    pub fn encode_into(&self, query: &QueryParams) -> QueryParams {
        let mut next = query.clone();
        for (key, bound) in [(keys::MIN, self.min_price), (keys::MAX, self.max_price)] {
            match bound {
                Some(v) => next.set(key, v.to_string()),
                None => next.delete(key),
            }
        }
        next.set(keys::SORT, self.sort.as_str());
        next.set(keys::CURRENCY, self.currency.code());
        let next = encode_set(&next, keys::COLOR, &self.colors);
        encode_set(&next, keys::SHAPE, &self.shapes)
    }
}

/// Collect every occurrence of `key` into an insertion-ordered set.
/// Blank values (`?color=`) select nothing.
pub fn decode_set(query: &QueryParams, key: &str) -> IndexSet<String> {
    query
        .get_all(key)
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Replace every occurrence of `key` with one pair per value.
pub fn encode_set<I>(query: &QueryParams, key: &str, values: I) -> QueryParams
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut next = query.clone();
    next.delete(key);
    for v in values {
        next.append(key, v.as_ref());
    }
    next
}

/// Parse a price parameter. Decimal values are truncated toward zero;
/// blank, negative or non-finite input yields `None`.
pub(crate) fn decode_price(raw: Option<&str>) -> Option<u64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(v) = raw.parse::<u64>() {
        return Some(v);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v.trunc() as u64),
        _ => {
            debug!(value = raw, "ignoring malformed price");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const B: PriceBounds = PriceBounds::STOREFRONT;

    #[test]
    fn empty_query_leaves_price_unbounded() {
        let s = FilterState::decode(&QueryParams::new());
        assert_eq!(s, FilterState::default());
        assert_eq!(s.price_window(), 0..=u64::MAX);
        assert_eq!(s.sort, SortKey::Recommended);
        // The slider still starts at the configured defaults.
        assert_eq!(s.slider(&B), (76_649, 1_268_175));
    }

    #[test]
    fn explicit_bounds_drive_window_and_slider() {
        let s = FilterState::decode(&QueryParams::parse("min=0"));
        assert_eq!(s.price_window(), 0..=u64::MAX);
        assert_eq!(s.slider(&B), (0, 1_268_175));

        let s = FilterState::decode(&QueryParams::parse("max=20000"));
        assert_eq!(s.price_window(), 0..=20_000);
        assert_eq!(s.slider(&B), (76_649, 20_000));
    }

    #[test]
    fn decodes_all_parameters() {
        let q = QueryParams::parse(
            "min=1000&max=20000&color=pink&color=blue&color=pink&shape=oval&sort=price-desc&currency=inr",
        );
        let s = FilterState::decode(&q);
        assert_eq!(s.min_price, Some(1_000));
        assert_eq!(s.max_price, Some(20_000));
        assert_eq!(s.colors.iter().collect::<Vec<_>>(), vec!["pink", "blue"]);
        assert_eq!(s.shapes.len(), 1);
        assert_eq!(s.sort, SortKey::PriceDescending);
        assert_eq!(s.currency, Currency::Inr);
    }

    #[test]
    fn malformed_numbers_count_as_absent() {
        for raw in ["min=abc&max=", "min=-5&max=NaN"] {
            let s = FilterState::decode(&QueryParams::parse(raw));
            assert_eq!(s.min_price, None, "{raw}");
            assert_eq!(s.max_price, None, "{raw}");
            assert_eq!(s.slider(&B), (B.default_min(), B.default_max()));
        }
    }

    #[test]
    fn blank_multi_values_select_nothing() {
        let q = QueryParams::parse("color=&color=%20&shape=oval&shape=");
        let s = FilterState::decode(&q);
        assert!(s.colors.is_empty());
        assert_eq!(s.shapes.iter().collect::<Vec<_>>(), vec!["oval"]);
    }

    #[test]
    fn decimal_prices_are_truncated() {
        assert_eq!(decode_price(Some(" 1500.9 ")), Some(1_500));
        assert_eq!(decode_price(Some("1e3")), Some(1_000));
        assert_eq!(decode_price(Some("inf")), None);
    }

    #[test]
    fn unknown_sort_and_currency_fall_back() {
        assert_eq!(SortKey::parse(Some("cheapest")), SortKey::Recommended);
        assert_eq!(SortKey::parse(Some("price-ascending")), SortKey::PriceAscending);
        assert_eq!(SortKey::parse(None), SortKey::Recommended);
        assert_eq!(Currency::parse(Some("gbp")), Currency::Usd);
        assert_eq!(Currency::parse(Some("eur")), Currency::Eur);
    }

    #[test]
    fn encode_set_preserves_other_parameters() {
        let q = QueryParams::parse("color=green&sort=rec&color=blue&min=5");
        let next = encode_set(&q, "color", ["pink", "yellow"]);
        assert_eq!(next.to_query_string(), "sort=rec&min=5&color=pink&color=yellow");
        // Caller's query is not touched.
        assert_eq!(q.get_all("color").count(), 2);
    }

    #[test]
    fn encode_into_then_decode_yields_same_state() {
        let q = QueryParams::parse("color=pink&shape=pear&sort=price-asc&min=2000&max=9000&utm=x");
        let s = FilterState::decode(&q);
        let encoded = s.encode_into(&QueryParams::parse("utm=x&max=1"));
        assert_eq!(encoded.get("utm"), Some("x"));
        assert_eq!(FilterState::decode(&encoded), s);

        let unbounded = FilterState::default().encode_into(&QueryParams::parse("min=5&max=9"));
        assert_eq!(unbounded.get("min"), None);
        assert_eq!(unbounded.get("max"), None);
    }

    #[test]
    fn wire_values_round_trip_through_parse() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(Some(&key.to_string())), key);
        }
        for c in Currency::ALL {
            assert_eq!(Currency::parse(Some(c.code())), c);
        }
    }
}
