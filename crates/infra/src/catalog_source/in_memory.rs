use shoefront_catalog::CatalogItem;

use super::{ensure_unique_slugs, CatalogSource, CatalogSourceError};

/// Fixed, already-validated list of items (tests/dev).
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogSource {
    items: Vec<CatalogItem>,
}

impl InMemoryCatalogSource {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }
}

impl CatalogSource for InMemoryCatalogSource {
    fn load(&self) -> Result<Vec<CatalogItem>, CatalogSourceError> {
        ensure_unique_slugs(&self.items)?;
        Ok(self.items.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} items)", self.items.len())
    }
}
