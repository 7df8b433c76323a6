//! Variant → visual treatment.

use serde::Serialize;

use crate::variant::DisplayVariant;

/// Promotional flag pinned to the card corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Badge {
    Sale,
    JustReleased,
}

/// Background color family of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Primary,
    Secondary,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::Sale => "Sale",
            Badge::JustReleased => "Just Released!",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            Badge::Sale => BadgeTone::Primary,
            Badge::JustReleased => BadgeTone::Secondary,
        }
    }
}

/// How the regular price is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceStyle {
    Regular,
    /// Muted and struck through, next to a highlighted sale price.
    Struck,
}

/// Visual treatment of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub badge: Option<Badge>,
    pub price_style: PriceStyle,
    pub show_sale_price: bool,
}

impl Presentation {
    pub fn for_variant(variant: DisplayVariant) -> Self {
        match variant {
            DisplayVariant::OnSale => Self {
                badge: Some(Badge::Sale),
                price_style: PriceStyle::Struck,
                show_sale_price: true,
            },
            DisplayVariant::NewRelease => Self {
                badge: Some(Badge::JustReleased),
                price_style: PriceStyle::Regular,
                show_sale_price: false,
            },
            DisplayVariant::Default => Self {
                badge: None,
                price_style: PriceStyle::Regular,
                show_sale_price: false,
            },
        }
    }
}
