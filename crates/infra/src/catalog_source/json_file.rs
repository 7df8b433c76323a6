use std::path::{Path, PathBuf};

use shoefront_catalog::{CatalogItem, CatalogItemRecord};

use super::{ensure_unique_slugs, CatalogSource, CatalogSourceError};

/// Catalog stored as a JSON array of camelCase records.
///
/// ```json
/// [{"slug": "tech-challenge-777", "name": "Tech Challenge 777",
///   "imageSrc": "/assets/tech-challenge-777.jpg", "price": 16000,
///   "salePrice": null, "releaseDate": "2024-05-20T00:00:00Z", "numOfColors": 2}]
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse and validate catalog JSON already in memory.
    pub fn parse(json: &str) -> Result<Vec<CatalogItem>, CatalogSourceError> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json)?;

        let items = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                let record: CatalogItemRecord = serde_json::from_value(value).map_err(|source| {
                    tracing::warn!(index, error = %source, "malformed catalog record");
                    CatalogSourceError::MalformedRecord { index, source }
                })?;
                CatalogItem::try_from(record).map_err(|source| {
                    tracing::warn!(index, error = %source, "rejected catalog record");
                    CatalogSourceError::InvalidRecord { index, source }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        ensure_unique_slugs(&items)?;
        Ok(items)
    }
}

impl CatalogSource for JsonFileCatalogSource {
    fn load(&self) -> Result<Vec<CatalogItem>, CatalogSourceError> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| CatalogSourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        Self::parse(&json)
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}
