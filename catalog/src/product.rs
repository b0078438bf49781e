//! Product record and its fixed enumerations.

use std::{fmt, str::FromStr};

use query_view::Listable;
use serde::Serialize;

use crate::errors::CatalogError;

/// Declares a lowercase string enumeration with `as_str`, `Display`,
/// `FromStr` and serde serialization.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(CatalogError::UnknownValue {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum! {
    /// Diamond color.
    Color, "color" {
        Green => "green",
        Pink => "pink",
        Blue => "blue",
        Yellow => "yellow",
        White => "white",
    }
}

string_enum! {
    /// Diamond cut shape.
    Shape, "shape" {
        Oval => "oval",
        Rectangle => "rectangle",
        Pear => "pear",
        Round => "round",
        Cushion => "cushion",
    }
}

string_enum! {
    /// Jewelry category. The wire form is the plural slug.
    Category, "category" {
        Rings => "rings",
        Bracelets => "bracelets",
        Necklaces => "necklaces",
        Earrings => "earrings",
    }
}

string_enum! {
    /// Named product line, browsed independently of category.
    Collection, "collection" {
        Lumiere => "lumiere",
        Prism => "prism",
        Soleil => "soleil",
        Riviere => "riviere",
        Amour => "amour",
        Ivy => "ivy",
    }
}

impl Color {
    /// Options offered by the listing's color filter.
    pub const FILTER_OPTIONS: [Color; 4] = [Color::Green, Color::Pink, Color::Blue, Color::Yellow];
}

impl Shape {
    /// Options offered by the listing's shape filter.
    pub const FILTER_OPTIONS: [Shape; 4] = [Shape::Oval, Shape::Rectangle, Shape::Pear, Shape::Round];
}

/// One catalog entry. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub image: String,
    pub price: u64,
    pub color: Color,
    pub shape: Shape,
    pub category: Category,
    pub collection: Collection,
}

impl Listable for Product {
    fn price(&self) -> u64 {
        self.price
    }

    fn color(&self) -> &str {
        self.color.as_str()
    }

    fn shape(&self) -> &str {
        self.shape.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_parse_their_wire_form() {
        for c in Color::ALL {
            assert_eq!(c.as_str().parse::<Color>(), Ok(*c));
        }
        assert_eq!("bracelets".parse::<Category>(), Ok(Category::Bracelets));
        assert_eq!(
            "Bracelets".parse::<Category>(),
            Err(CatalogError::UnknownValue {
                kind: "category",
                value: "Bracelets".into()
            })
        );
        assert_eq!(Collection::Riviere.to_string(), "riviere");
    }

    #[test]
    fn filter_options_are_a_subset_of_the_enumeration() {
        assert!(Color::FILTER_OPTIONS.iter().all(|c| Color::ALL.contains(c)));
        assert!(!Shape::FILTER_OPTIONS.contains(&Shape::Cushion));
    }
}
