//! Built-in storefront products.

use crate::product::{
    Category::{self, Bracelets, Earrings, Necklaces, Rings},
    Collection::{self, Amour, Ivy, Lumiere, Prism, Riviere, Soleil},
    Color::{self, Blue, Green, Pink},
    Product,
    Shape::{self, Oval, Pear, Rectangle},
};

struct Design {
    title: &'static str,
    subtitle: &'static str,
    image: &'static str,
    price: u64,
    color: Color,
    shape: Shape,
    category: Category,
}

const OVAL_SOLITAIRE: Design = Design {
    title: "Oval Cut Lab Diamond",
    subtitle: "Solitaire Ring (c7-44)",
    image: "/images/oval-default.png",
    price: 9_500,
    color: Green,
    shape: Oval,
    category: Rings,
};

const PINK_HALO_BRACELET: Design = Design {
    title: "Pink Lab Diamond bracelet",
    subtitle: "Halo bracelet (CV136)",
    image: "/images/pink-default.png",
    price: 12_500,
    color: Pink,
    shape: Rectangle,
    category: Bracelets,
};

const BLUE_PENDANT: Design = Design {
    title: "Blue Lab Diamond Pendant",
    subtitle: "Necklace (CV40-3)",
    image: "/images/blue-pendant-default.png",
    price: 15_400,
    color: Blue,
    shape: Pear,
    category: Necklaces,
};

const PINK_EARRING_SET: Design = Design {
    title: "Pink Lab Diamond Halo Earrings",
    subtitle: "and Pendant (CV39-2, CV39-5)",
    image: "/images/pink-earring-set-default.png",
    price: 14_200,
    color: Pink,
    shape: Oval,
    category: Earrings,
};

/// Each design is offered in several collections; ids follow table order.
const LISTINGS: &[(&Design, Collection)] = &[
    (&OVAL_SOLITAIRE, Lumiere),
    (&OVAL_SOLITAIRE, Prism),
    (&OVAL_SOLITAIRE, Soleil),
    (&PINK_HALO_BRACELET, Prism),
    (&PINK_HALO_BRACELET, Ivy),
    (&PINK_HALO_BRACELET, Amour),
    (&BLUE_PENDANT, Riviere),
    (&BLUE_PENDANT, Prism),
    (&BLUE_PENDANT, Soleil),
    (&PINK_EARRING_SET, Lumiere),
    (&PINK_EARRING_SET, Amour),
    (&PINK_EARRING_SET, Prism),
];

pub(crate) fn storefront_products() -> Vec<Product> {
    LISTINGS
        .iter()
        .enumerate()
        .map(|(i, (d, collection))| Product {
            id: (i + 1).to_string(),
            title: d.title.to_string(),
            subtitle: Some(d.subtitle.to_string()),
            image: d.image.to_string(),
            price: d.price,
            color: d.color,
            shape: d.shape,
            category: d.category,
            collection: *collection,
        })
        .collect()
}
