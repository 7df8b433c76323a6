use std::collections::HashMap;
use std::sync::Arc;

use shoefront_catalog::{CatalogItem, RecencyWindow, ShoeCard, ShoeGrid};
use shoefront_core::{Clock, DomainError, DomainResult, Slug};

use crate::render::{PageRenderer, RenderError};

/// Read-only state shared by all handlers.
///
/// The catalog is loaded once at startup and never mutated. Each request reads
/// the clock once, so every card on a page is classified against the same instant.
pub struct AppState {
    items: Vec<CatalogItem>,
    by_slug: HashMap<Slug, usize>,
    window: RecencyWindow,
    clock: Arc<dyn Clock>,
    renderer: PageRenderer,
}

impl AppState {
    pub fn new(
        items: Vec<CatalogItem>,
        window: RecencyWindow,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AppStateError> {
        let mut by_slug = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if by_slug.insert(item.slug().clone(), index).is_some() {
                return Err(AppStateError::Domain(DomainError::invariant(format!(
                    "duplicate slug {}",
                    item.slug()
                ))));
            }
        }

        Ok(Self {
            items,
            by_slug,
            window,
            clock,
            renderer: PageRenderer::new()?,
        })
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn window(&self) -> RecencyWindow {
        self.window
    }

    pub fn renderer(&self) -> &PageRenderer {
        &self.renderer
    }

    pub fn grid(&self) -> ShoeGrid {
        ShoeGrid::build(&self.items, self.clock.now(), self.window)
    }

    /// Card for one slug. Unknown or malformed slugs are `NotFound`.
    pub fn card(&self, slug: &str) -> DomainResult<ShoeCard> {
        let slug = Slug::parse(slug).map_err(|_| DomainError::not_found())?;
        let index = *self.by_slug.get(&slug).ok_or_else(DomainError::not_found)?;
        Ok(ShoeCard::from_item(&self.items[index], self.clock.now(), self.window))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use shoefront_catalog::{DisplayVariant, NewCatalogItem};
    use shoefront_core::{FixedClock, MinorUnits};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn item(slug: &str, released_days_ago: i64) -> CatalogItem {
        CatalogItem::new(NewCatalogItem {
            slug: Slug::parse(slug).unwrap(),
            name: slug.to_string(),
            image_src: format!("/assets/{slug}.jpg"),
            price: MinorUnits::new(9000),
            sale_price: None,
            release_date: now() - Duration::days(released_days_ago),
            num_of_colors: 1,
        })
        .unwrap()
    }

    fn state(items: Vec<CatalogItem>) -> Result<AppState, AppStateError> {
        AppState::new(items, RecencyWindow::default(), Arc::new(FixedClock(now())))
    }

    #[test]
    fn card_is_classified_against_the_injected_clock() {
        let state = state(vec![item("fresh", 1), item("old", 90)]).unwrap();
        assert_eq!(state.card("fresh").unwrap().variant, DisplayVariant::NewRelease);
        assert_eq!(state.card("old").unwrap().variant, DisplayVariant::Default);
    }

    #[test]
    fn unknown_and_malformed_slugs_are_not_found() {
        let state = state(vec![item("fresh", 1)]).unwrap();
        assert_eq!(state.card("missing"), Err(DomainError::NotFound));
        assert_eq!(state.card("../etc"), Err(DomainError::NotFound));
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let err = state(vec![item("twin", 1), item("twin", 2)]).err().unwrap();
        assert!(matches!(err, AppStateError::Domain(DomainError::InvariantViolation(_))));
    }

    #[test]
    fn grid_contains_every_item() {
        let state = state(vec![item("a", 1), item("b", 2), item("c", 3)]).unwrap();
        assert_eq!(state.grid().cards.len(), state.item_count());
    }
}
