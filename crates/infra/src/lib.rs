//! Infrastructure layer: where catalog items come from.

pub mod catalog_source;

pub use catalog_source::{
    demo_catalog, CatalogSource, CatalogSourceError, InMemoryCatalogSource, JsonFileCatalogSource,
};
