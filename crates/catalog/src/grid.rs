//! Grid of shoe cards.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::card::ShoeCard;
use crate::item::CatalogItem;
use crate::variant::{DisplayVariant, RecencyWindow};

/// Layout constants for the wrapping card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    pub gap_px: u32,
    /// Flex basis of each card, in percent of the row.
    pub card_basis_percent: u32,
    pub card_min_width_px: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            gap_px: 32,
            card_basis_percent: 30,
            card_min_width_px: 300,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VariantCounts {
    pub default: usize,
    pub on_sale: usize,
    pub new_release: usize,
}

impl VariantCounts {
    fn record(&mut self, variant: DisplayVariant) {
        match variant {
            DisplayVariant::Default => self.default += 1,
            DisplayVariant::OnSale => self.on_sale += 1,
            DisplayVariant::NewRelease => self.new_release += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.default + self.on_sale + self.new_release
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoeGrid {
    pub layout: GridLayout,
    pub cards: Vec<ShoeCard>,
    pub counts: VariantCounts,
}

impl ShoeGrid {
    /// One card per item, in input order. Every card is classified against the
    /// same `now`.
    pub fn build(items: &[CatalogItem], now: DateTime<Utc>, window: RecencyWindow) -> Self {
        let mut counts = VariantCounts::default();
        let cards = items
            .iter()
            .map(|item| {
                let card = ShoeCard::from_item(item, now, window);
                counts.record(card.variant);
                card
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            cards = cards.len(),
            on_sale = counts.on_sale,
            new_release = counts.new_release,
            default = counts.default,
            "built shoe grid"
        );

        Self {
            layout: GridLayout::default(),
            cards,
            counts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
