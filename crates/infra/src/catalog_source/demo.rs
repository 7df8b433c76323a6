//! Built-in sample catalog, served when no catalog file is configured.

use chrono::{DateTime, Duration, Utc};

use shoefront_catalog::{CatalogItem, NewCatalogItem};
use shoefront_core::{DomainResult, MinorUnits, Slug};

struct DemoShoe {
    slug: &'static str,
    name: &'static str,
    price: u64,
    sale_price: Option<u64>,
    released_days_ago: i64,
    num_of_colors: u32,
}

const DEMO_SHOES: &[DemoShoe] = &[
    DemoShoe { slug: "tech-challenge-777", name: "NikeCourt Tech Challenge 20", price: 16500, sale_price: None, released_days_ago: 2, num_of_colors: 2 },
    DemoShoe { slug: "grand-court", name: "Nike Grand Court", price: 7500, sale_price: Some(6000), released_days_ago: 10, num_of_colors: 3 },
    DemoShoe { slug: "air-zoom-pegasus", name: "Nike Air Zoom Pegasus", price: 12000, sale_price: None, released_days_ago: 42, num_of_colors: 4 },
    DemoShoe { slug: "react-infinity-run", name: "Nike React Infinity Run", price: 16000, sale_price: None, released_days_ago: 29, num_of_colors: 1 },
    DemoShoe { slug: "phantom-vision", name: "Nike Phantom Vision", price: 20000, sale_price: Some(15500), released_days_ago: 300, num_of_colors: 1 },
    DemoShoe { slug: "court-vision-low", name: "Nike Court Vision Low", price: 6500, sale_price: None, released_days_ago: 400, num_of_colors: 5 },
];

/// Demo items with release dates relative to `now`, so every variant shows up.
pub fn demo_catalog(now: DateTime<Utc>) -> DomainResult<Vec<CatalogItem>> {
    DEMO_SHOES
        .iter()
        .map(|shoe| {
            CatalogItem::new(NewCatalogItem {
                slug: Slug::parse(shoe.slug)?,
                name: shoe.name.to_string(),
                image_src: format!("/assets/{}.jpg", shoe.slug),
                price: MinorUnits::new(shoe.price),
                sale_price: shoe.sale_price.map(MinorUnits::new),
                release_date: now - Duration::days(shoe.released_days_ago),
                num_of_colors: shoe.num_of_colors,
            })
        })
        .collect()
}
