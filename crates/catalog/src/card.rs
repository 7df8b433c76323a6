//! Card view model: everything a template needs to draw one shoe.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::format::{format_price, pluralize};
use crate::item::CatalogItem;
use crate::presentation::{Badge, BadgeTone, PriceStyle, Presentation};
use crate::variant::{DisplayVariant, RecencyWindow};

/// Badge text + tone, flattened for templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardBadge {
    pub kind: Badge,
    pub label: &'static str,
    pub tone: BadgeTone,
}

impl From<Badge> for CardBadge {
    fn from(kind: Badge) -> Self {
        Self {
            kind,
            label: kind.label(),
            tone: kind.tone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoeCard {
    pub slug: String,
    pub href: String,
    pub name: String,
    pub image_src: String,
    pub variant: DisplayVariant,
    pub price: String,
    pub price_style: PriceStyle,
    /// Only set for [`DisplayVariant::OnSale`].
    pub sale_price: Option<String>,
    pub color_label: String,
    pub badge: Option<CardBadge>,
}

impl ShoeCard {
    pub fn from_item(item: &CatalogItem, now: DateTime<Utc>, window: RecencyWindow) -> Self {
        let variant = item.variant(now, window);
        let presentation = Presentation::for_variant(variant);

        let sale_price = if presentation.show_sale_price {
            item.sale_price().map(format_price)
        } else {
            None
        };

        Self {
            slug: item.slug().to_string(),
            href: format!("/shoe/{}", item.slug()),
            name: item.name().to_string(),
            image_src: item.image_src().to_string(),
            variant,
            price: format_price(item.price()),
            price_style: presentation.price_style,
            sale_price,
            color_label: pluralize("Color", item.num_of_colors()),
            badge: presentation.badge.map(CardBadge::from),
        }
    }
}
