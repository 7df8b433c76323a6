//! Shoe catalog domain.
//!
//! Deterministic presentation logic for a grid of shoe cards: classifying an
//! item into a display variant, formatting its price and color count, and
//! assembling cards into a grid. No IO, no HTTP, no templates; the evaluation
//! instant is always passed in.

pub mod card;
pub mod format;
pub mod grid;
pub mod item;
pub mod presentation;
pub mod variant;

pub use card::{CardBadge, ShoeCard};
pub use format::{format_price, is_within_recency_window, pluralize};
pub use grid::{GridLayout, ShoeGrid, VariantCounts};
pub use item::{CatalogItem, CatalogItemRecord, NewCatalogItem};
pub use presentation::{Badge, BadgeTone, PriceStyle, Presentation};
pub use variant::{classify, DisplayVariant, RecencyWindow};
