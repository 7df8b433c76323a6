//! Catalog sources: load validated [`CatalogItem`]s.
//!
//! Sources fail fast. A catalog containing one malformed record or a repeated
//! slug is rejected as a whole, so nothing malformed reaches the classifier.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use shoefront_catalog::CatalogItem;
use shoefront_core::{DomainError, Slug};

pub mod demo;
pub mod in_memory;
pub mod json_file;

pub use demo::demo_catalog;
pub use in_memory::InMemoryCatalogSource;
pub use json_file::JsonFileCatalogSource;

#[derive(Debug, Error)]
pub enum CatalogSourceError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("malformed catalog record #{index}: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog record #{index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: DomainError,
    },

    #[error("duplicate slug in catalog: {0}")]
    DuplicateSlug(Slug),
}

/// Something that can produce the ordered list of items to render.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Vec<CatalogItem>, CatalogSourceError>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

impl<S> CatalogSource for Arc<S>
where
    S: CatalogSource + ?Sized,
{
    fn load(&self) -> Result<Vec<CatalogItem>, CatalogSourceError> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Reject catalogs in which a slug appears twice.
pub fn ensure_unique_slugs(items: &[CatalogItem]) -> Result<(), CatalogSourceError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.slug()) {
            return Err(CatalogSourceError::DuplicateSlug(item.slug().clone()));
        }
    }
    Ok(())
}
