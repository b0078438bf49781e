//! Listing slugs: which base subset of the catalog a page shows.
//!
//! Categories are matched through an explicit alias table holding both the
//! plural slug and its singular form (`bracelets` / `bracelet`). Collections
//! and the reserved `all-products` slug match exactly. Matching is
//! case-insensitive.

use serde::Serialize;
use tracing::debug;

use crate::{
    errors::{CatalogError, CatalogResult},
    product::{Category, Collection, Product},
};

/// Slug that lists the whole catalog.
pub const ALL_PRODUCTS_SLUG: &str = "all-products";

const CATEGORY_ALIASES: &[(&str, Category)] = &[
    ("rings", Category::Rings),
    ("ring", Category::Rings),
    ("bracelets", Category::Bracelets),
    ("bracelet", Category::Bracelets),
    ("necklaces", Category::Necklaces),
    ("necklace", Category::Necklaces),
    ("earrings", Category::Earrings),
    ("earring", Category::Earrings),
];

/// Base selection of a listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingScope {
    All,
    Category(Category),
    Collection(Collection),
}

impl ListingScope {
    /// Resolve a path slug.
    ///
    /// # Errors
    /// [`CatalogError::NotFound`] when the slug names nothing the storefront
    /// lists; the page layer turns this into a not-found response.
    pub fn resolve(raw: &str) -> CatalogResult<Self> {
        let slug = raw.trim().to_ascii_lowercase();

        if slug == ALL_PRODUCTS_SLUG {
            return Ok(ListingScope::All);
        }
        if let Some(c) = Collection::ALL.iter().find(|c| c.as_str() == slug) {
            return Ok(ListingScope::Collection(*c));
        }
        if let Some((_, c)) = CATEGORY_ALIASES.iter().find(|(alias, _)| *alias == slug) {
            return Ok(ListingScope::Category(*c));
        }

        debug!(slug = %raw, "slug did not resolve");
        Err(CatalogError::NotFound(raw.to_string()))
    }

    /// Canonical slug for links.
    pub fn slug(&self) -> &'static str {
        match self {
            ListingScope::All => ALL_PRODUCTS_SLUG,
            ListingScope::Category(c) => c.as_str(),
            ListingScope::Collection(c) => c.as_str(),
        }
    }

    pub fn kind(&self) -> ScopeKind {
        match self {
            ListingScope::All => ScopeKind::All,
            ListingScope::Category(_) => ScopeKind::Category,
            ListingScope::Collection(_) => ScopeKind::Collection,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ListingScope::All => true,
            ListingScope::Category(c) => product.category == *c,
            ListingScope::Collection(c) => product.collection == *c,
        }
    }

    /// Page title, heading and copy for this listing.
    pub fn meta(&self) -> ListingMeta {
        let heading = match self {
            ListingScope::All => "All Products".to_string(),
            _ => capitalize(self.slug()),
        };
        let slug = self.slug();

        let (description, intro) = match self {
            ListingScope::All => (
                "Browse all products across categories and collections, crafted with lab-grown diamonds."
                    .to_string(),
                "Explore our entire range of lab-grown diamond jewelry across rings, bracelets, necklaces, and earrings."
                    .to_string(),
            ),
            ListingScope::Collection(_) => (
                format!(
                    "Explore the {heading} collection crafted with lab-grown diamonds: vibrant, sustainable, and timeless."
                ),
                format!(
                    "Discover the {heading} collection, vibrant lab-grown diamond designs to elevate every look."
                ),
            ),
            ListingScope::Category(_) => (
                format!(
                    "Explore {heading} crafted with lab-grown diamonds: vibrant, sustainable, and timeless."
                ),
                format!(
                    "Wrap your wrist in luxury with our vibrant diamond {slug}, perfect for stacking or wearing solo for effortless elegance."
                ),
            ),
        };

        ListingMeta {
            slug,
            kind: self.kind(),
            title: format!("{heading} | Glevera"),
            heading,
            description,
            intro,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeKind {
    All,
    Category,
    Collection,
}

/// Display metadata of a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingMeta {
    pub slug: &'static str,
    pub kind: ScopeKind,
    /// Document title.
    pub title: String,
    pub heading: String,
    /// Meta description.
    pub description: String,
    /// Lead paragraph under the heading.
    pub intro: String,
}

/// Every canonical slug: categories, then collections, then `all-products`.
pub fn known_scopes() -> Vec<ListingScope> {
    Category::ALL
        .iter()
        .map(|c| ListingScope::Category(*c))
        .chain(Collection::ALL.iter().map(|c| ListingScope::Collection(*c)))
        .chain(std::iter::once(ListingScope::All))
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
