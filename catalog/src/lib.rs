//! Storefront catalog: product model, the built-in product table and the
//! slug rules that pick a listing's base subset.
//!
//! The catalog is read-only for the lifetime of the process. Listing pages
//! borrow from it and hand the borrowed subset to [`query_view::view`].

mod data;
pub mod errors;
mod product;
mod slug;

use std::collections::HashSet;

use tracing::debug;

pub use errors::{CatalogError, CatalogResult};
pub use product::{Category, Collection, Color, Product, Shape};
pub use slug::{ALL_PRODUCTS_SLUG, ListingMeta, ListingScope, ScopeKind, known_scopes};

/// Immutable product collection with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for p in &products {
            if !seen.insert(p.id.as_str()) {
                return Err(CatalogError::DuplicateId(p.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// The built-in storefront products, checked like any other catalog.
    pub fn storefront() -> CatalogResult<Self> {
        Self::new(data::storefront_products())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Base subset for a listing, in catalog order.
    pub fn select(&self, scope: &ListingScope) -> Vec<&Product> {
        let picked: Vec<&Product> = self.products.iter().filter(|p| scope.matches(p)).collect();
        debug!(scope = scope.slug(), count = picked.len(), "selected listing base");
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_view::{FilterState, QueryParams, SortKey, view};

    #[test]
    fn storefront_catalog_has_unique_ids() {
        let built = Catalog::storefront().expect("built-in ids are unique");
        assert_eq!(built.len(), 12);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut products = Catalog::storefront().unwrap().products().to_vec();
        products.push(products[0].clone());
        assert_eq!(
            Catalog::new(products).unwrap_err(),
            CatalogError::DuplicateId("1".into())
        );
    }

    #[test]
    fn select_by_category_collection_and_all() {
        let catalog = Catalog::storefront().unwrap();

        let bracelets = catalog.select(&ListingScope::resolve("bracelet").unwrap());
        assert_eq!(bracelets.len(), 3);
        assert!(bracelets.iter().all(|p| p.category == Category::Bracelets));

        let prism = catalog.select(&ListingScope::Collection(Collection::Prism));
        let ids: Vec<&str> = prism.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4", "8", "12"]);

        assert_eq!(catalog.select(&ListingScope::All).len(), catalog.len());
    }

    #[test]
    fn pink_filter_over_two_product_catalog() {
        let catalog = Catalog::storefront().unwrap();
        let two = [catalog.get("1").unwrap(), catalog.get("4").unwrap()];

        let q = QueryParams::parse("min=0&max=20000&color=pink&sort=rec");
        let state = FilterState::decode(&q);
        let ids: Vec<&str> = view(two.iter().copied(), &state)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["4"]);

        let q = QueryParams::parse("min=0&max=20000&sort=price-desc");
        let state = FilterState::decode(&q);
        let v = view(two.iter().copied(), &state);
        let prices: Vec<u64> = v.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![12_500, 9_500]);
        assert_eq!(v.sort(), SortKey::PriceDescending);
    }
}
