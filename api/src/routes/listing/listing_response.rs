//! Listing payload: products plus every control the page renders, each
//! with the location it navigates to.

use catalog::{Color, ListingMeta, ListingScope, Product, Shape};
use query_view::{
    Currency, FilterState, IndexSet, MultiKey, PriceBounds, ProductView, QueryParams, SortKey,
    clear, href, set_currency, set_sort, toggle,
};
use serde::Serialize;

/// Response payload for `GET /categories/{slug}`.
#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub meta: ListingMeta,
    /// Canonical location of this page, query included.
    pub location: String,
    pub filters: FilterState,
    /// Number of products after filtering.
    pub count: usize,
    pub products: Vec<Product>,
    pub controls: ListingControls,
}

#[derive(Debug, Serialize)]
pub struct ListingControls {
    pub price: PriceControl,
    pub colors: FacetControl,
    pub shapes: FacetControl,
    pub sort: Vec<SortOption>,
    pub currencies: Vec<CurrencyOption>,
}

/// Two-slider price filter. Moves are POSTed to `navigate`.
#[derive(Debug, Serialize)]
pub struct PriceControl {
    pub domain_min: u64,
    pub domain_max: u64,
    pub step: u64,
    pub min: u64,
    pub max: u64,
    pub navigate: String,
}

#[derive(Debug, Serialize)]
pub struct FacetControl {
    pub key: MultiKey,
    pub options: Vec<FacetOption>,
    /// Present only while something is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_href: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FacetOption {
    pub value: &'static str,
    pub label: String,
    pub selected: bool,
    /// Location with this value toggled.
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct SortOption {
    pub value: SortKey,
    pub label: &'static str,
    pub selected: bool,
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct CurrencyOption {
    pub code: Currency,
    pub selected: bool,
    pub href: String,
}

impl ListingResponse {
    /// Assemble the payload. Control links are derived from `query` as
    /// received, so unrelated parameters survive every navigation.
    pub fn build(
        scope: ListingScope,
        query: &QueryParams,
        filters: FilterState,
        products: &ProductView<'_, Product>,
        bounds: &PriceBounds,
    ) -> Self {
        let path = format!("/categories/{}", scope.slug());
        let (slider_min, slider_max) = filters.slider(bounds);

        let controls = ListingControls {
            price: PriceControl {
                domain_min: bounds.domain_min(),
                domain_max: bounds.domain_max(),
                step: bounds.step(),
                min: slider_min,
                max: slider_max,
                navigate: href(&format!("{path}/navigate"), query),
            },
            colors: facet(
                MultiKey::Color,
                Color::FILTER_OPTIONS.iter().map(|c| c.as_str()),
                &filters.colors,
                query,
                &path,
            ),
            shapes: facet(
                MultiKey::Shape,
                Shape::FILTER_OPTIONS.iter().map(|s| s.as_str()),
                &filters.shapes,
                query,
                &path,
            ),
            sort: SortKey::ALL
                .into_iter()
                .map(|key| SortOption {
                    value: key,
                    label: key.label(),
                    selected: key == filters.sort,
                    href: href(&path, &set_sort(query, key)),
                })
                .collect(),
            currencies: Currency::ALL
                .into_iter()
                .map(|code| CurrencyOption {
                    code,
                    selected: code == filters.currency,
                    href: href(&path, &set_currency(query, code)),
                })
                .collect(),
        };

        Self {
            meta: scope.meta(),
            location: href(&path, query),
            count: products.len(),
            products: products.iter().cloned().collect(),
            filters,
            controls,
        }
    }
}

fn facet(
    key: MultiKey,
    options: impl Iterator<Item = &'static str>,
    selected: &IndexSet<String>,
    query: &QueryParams,
    path: &str,
) -> FacetControl {
    let options = options
        .map(|value| FacetOption {
            value,
            label: capitalize(value),
            selected: selected.contains(value),
            href: href(path, &toggle(query, key.as_str(), value)),
        })
        .collect();

    let clear_href = (!selected.is_empty()).then(|| href(path, &clear(query, key.as_str())));

    FacetControl {
        key,
        options,
        clear_href,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
