//! Filter/sort engine: catalog + [`FilterState`] -> ordered product view.

use tracing::debug;

use crate::state::{FilterState, SortKey};

/// What the engine needs to know about a catalog entry.
pub trait Listable {
    fn price(&self) -> u64;
    fn color(&self) -> &str;
    fn shape(&self) -> &str;
}

impl<T: Listable + ?Sized> Listable for &T {
    fn price(&self) -> u64 {
        (**self).price()
    }

    fn color(&self) -> &str {
        (**self).color()
    }

    fn shape(&self) -> &str {
        (**self).shape()
    }
}

impl FilterState {
    /// Price window (inclusive) and color/shape membership. An absent
    /// bound or an empty selection set does not filter.
    pub fn admits<P: Listable + ?Sized>(&self, product: &P) -> bool {
        self.price_window().contains(&product.price())
            && (self.colors.is_empty() || self.colors.contains(product.color()))
            && (self.shapes.is_empty() || self.shapes.contains(product.shape()))
    }
}

/// Filtered, ordered borrow of catalog entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView<'a, P> {
    items: Vec<&'a P>,
    sort: SortKey,
}

impl<'a, P> ProductView<'a, P> {
    pub fn items(&self) -> &[&'a P] {
        &self.items
    }

    pub fn into_items(self) -> Vec<&'a P> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a P> + '_ {
        self.items.iter().copied()
    }
}

/// Apply price/color/shape filters, then order by `state.sort`.
///
/// Sorting is stable, so equal prices keep catalog order. The catalog is
/// only borrowed.
pub fn view<'a, P, I>(catalog: I, state: &FilterState) -> ProductView<'a, P>
where
    P: Listable + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let mut items: Vec<&'a P> = catalog.into_iter().filter(|p| state.admits(*p)).collect();

    match state.sort {
        SortKey::Recommended => {}
        SortKey::PriceAscending => items.sort_by_key(|p| p.price()),
        SortKey::PriceDescending => items.sort_by_key(|p| std::cmp::Reverse(p.price())),
    }

    debug!(sort = %state.sort, hits = items.len(), "view computed");

    ProductView {
        items,
        sort: state.sort,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::QueryParams;
    use indexmap::IndexSet;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        price: u64,
        color: &'static str,
        shape: &'static str,
    }

    impl Listable for Item {
        fn price(&self) -> u64 {
            self.price
        }
        fn color(&self) -> &str {
            self.color
        }
        fn shape(&self) -> &str {
            self.shape
        }
    }

    fn two_items() -> Vec<Item> {
        vec![
            Item { id: 1, price: 9_500, color: "green", shape: "oval" },
            Item { id: 2, price: 12_500, color: "pink", shape: "rectangle" },
        ]
    }

    fn state(colors: &[&str], shapes: &[&str], sort: SortKey) -> FilterState {
        FilterState {
            min_price: Some(0),
            max_price: Some(20_000),
            colors: colors.iter().map(|s| s.to_string()).collect(),
            shapes: shapes.iter().map(|s| s.to_string()).collect(),
            sort,
            currency: Default::default(),
        }
    }

    fn ids(v: &ProductView<'_, Item>) -> Vec<u32> {
        v.iter().map(|p| p.id).collect()
    }

    #[test]
    fn color_filter_selects_pink_only() {
        let catalog = two_items();
        let v = view(&catalog, &state(&["pink"], &[], SortKey::Recommended));
        assert_eq!(ids(&v), vec![2]);
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn price_descending_orders_by_price() {
        let catalog = two_items();
        let v = view(&catalog, &state(&[], &[], SortKey::PriceDescending));
        assert_eq!(ids(&v), vec![2, 1]);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let catalog = two_items();
        let mut s = state(&[], &[], SortKey::Recommended);
        s.min_price = Some(9_500);
        s.max_price = Some(12_500);
        assert_eq!(ids(&view(&catalog, &s)), vec![1, 2]);
        s.max_price = Some(12_499);
        assert_eq!(ids(&view(&catalog, &s)), vec![1]);
    }

    #[test]
    fn bare_query_lists_the_whole_catalog() {
        let catalog = two_items();
        let s = FilterState::decode(&QueryParams::new());
        assert_eq!(ids(&view(&catalog, &s)), vec![1, 2]);

        // One-sided bounds filter on that side only.
        let s = FilterState::decode(&QueryParams::parse("min=10000"));
        assert_eq!(ids(&view(&catalog, &s)), vec![2]);
        let s = FilterState::decode(&QueryParams::parse("max=10000"));
        assert_eq!(ids(&view(&catalog, &s)), vec![1]);
    }

    #[test]
    fn blank_color_parameter_does_not_filter() {
        let catalog = two_items();
        let s = FilterState::decode(&QueryParams::parse("color="));
        assert_eq!(ids(&view(&catalog, &s)), vec![1, 2]);
    }

    #[test]
    fn empty_catalog_and_no_match_are_empty_views() {
        let empty: Vec<Item> = Vec::new();
        assert!(view(&empty, &state(&[], &[], SortKey::PriceAscending)).is_empty());

        let catalog = two_items();
        assert!(view(&catalog, &state(&["blue"], &["pear"], SortKey::Recommended)).is_empty());
    }

    #[test]
    fn works_over_borrowed_subsets() {
        let catalog = two_items();
        let subset: Vec<&Item> = catalog.iter().filter(|p| p.id == 2).collect();
        let v = view(subset.iter().copied(), &state(&[], &["rectangle"], SortKey::Recommended));
        assert_eq!(ids(&v), vec![2]);
    }

    fn item_strategy() -> impl Strategy<Value = Item> {
        (
            any::<u32>(),
            0u64..40_000,
            prop::sample::select(vec!["green", "pink", "blue", "yellow", "white"]),
            prop::sample::select(vec!["oval", "rectangle", "pear", "round", "cushion"]),
        )
            .prop_map(|(id, price, color, shape)| Item { id, price, color, shape })
    }

    fn state_strategy() -> impl Strategy<Value = FilterState> {
        (
            prop::option::of(0u64..40_000),
            prop::option::of(0u64..40_000),
            prop::sample::subsequence(vec!["green", "pink", "blue", "purple"], 0..=4),
            prop::sample::subsequence(vec!["oval", "pear", "round"], 0..=3),
            prop::sample::select(SortKey::ALL.to_vec()),
        )
            .prop_map(|(min, max, colors, shapes, sort)| FilterState {
                min_price: min,
                max_price: max,
                colors: colors.into_iter().map(String::from).collect::<IndexSet<_>>(),
                shapes: shapes.into_iter().map(String::from).collect::<IndexSet<_>>(),
                sort,
                currency: Default::default(),
            })
    }

    proptest! {
        #[test]
        fn view_is_exactly_the_admitted_subset(
            catalog in prop::collection::vec(item_strategy(), 0..20),
            s in state_strategy(),
        ) {
            let v = view(&catalog, &s);
            let expected: Vec<&Item> = catalog
                .iter()
                .filter(|p| s.min_price.is_none_or(|m| m <= p.price))
                .filter(|p| s.max_price.is_none_or(|m| p.price <= m))
                .filter(|p| s.colors.is_empty() || s.colors.contains(p.color))
                .filter(|p| s.shapes.is_empty() || s.shapes.contains(p.shape))
                .collect();

            prop_assert_eq!(v.len(), expected.len());
            for p in &expected {
                let expected_count = expected.iter().filter(|q| std::ptr::eq(**q, *p)).count();
                let actual_count = v.iter().filter(|q| std::ptr::eq(*q, *p)).count();
                prop_assert_eq!(expected_count, actual_count);
            }

            match s.sort {
                SortKey::Recommended => {
                    let got: Vec<*const Item> = v.iter().map(|p| p as *const Item).collect();
                    let want: Vec<*const Item> = expected.iter().map(|p| *p as *const Item).collect();
                    prop_assert_eq!(got, want);
                }
                SortKey::PriceAscending => {
                    prop_assert!(v.items().windows(2).all(|w| w[0].price <= w[1].price));
                }
                SortKey::PriceDescending => {
                    prop_assert!(v.items().windows(2).all(|w| w[0].price >= w[1].price));
                }
            }

            prop_assert_eq!(view(&catalog, &s), v);
        }
    }
}
