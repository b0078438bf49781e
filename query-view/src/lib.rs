//! URL-query-driven product view.
//!
//! The listing page keeps every filter and sort selection in its query
//! string. This crate is the pure part of that cycle:
//!
//! query string -> [`FilterState::decode`] -> [`view`] -> rendered list,
//! and for interactions: query -> [`toggle`] / [`clear`] / [`apply_min`] /
//! [`apply_max`] / [`set_sort`] -> new query for the caller to navigate to.
//!
//! Nothing here holds state between calls; inputs are never mutated.
//!
//! # Example
//! ```
//! use query_view::{FilterState, Listable, QueryParams, toggle, view};
//!
//! struct Ring { price: u64, color: &'static str }
//!
//! impl Listable for Ring {
//!     fn price(&self) -> u64 { self.price }
//!     fn color(&self) -> &str { self.color }
//!     fn shape(&self) -> &str { "oval" }
//! }
//!
//! let catalog = [Ring { price: 90_000, color: "pink" }, Ring { price: 95_000, color: "blue" }];
//! let query = toggle(&QueryParams::parse("sort=price-desc"), "color", "pink");
//! let state = FilterState::decode(&query);
//! assert_eq!(view(&catalog, &state).len(), 1);
//! ```

mod engine;
mod params;
mod range;
mod state;
mod toggle;

pub use engine::{Listable, ProductView, view};
pub use params::{QueryParams, href};
pub use range::{PriceBounds, RangeError, RangeResult, apply_max, apply_min};
pub use state::{Currency, FilterState, SortKey, decode_set, encode_set, keys};
pub use toggle::{MultiKey, UnknownKey, clear, set_currency, set_sort, toggle};

pub use indexmap::IndexSet;
