use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shoefront_core::{DomainError, DomainResult, MinorUnits, Slug};

use crate::variant::{classify, DisplayVariant, RecencyWindow};

/// A shoe listing, validated and read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    slug: Slug,
    name: String,
    image_src: String,
    price: MinorUnits,
    sale_price: Option<MinorUnits>,
    release_date: DateTime<Utc>,
    num_of_colors: u32,
}

/// Input for [`CatalogItem::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCatalogItem {
    pub slug: Slug,
    pub name: String,
    pub image_src: String,
    pub price: MinorUnits,
    pub sale_price: Option<MinorUnits>,
    pub release_date: DateTime<Utc>,
    pub num_of_colors: u32,
}

impl CatalogItem {
    /// Validate and build an item. Rejects blank names and image references.
    ///
    /// A sale price that is not below the regular price is accepted as-is.
    pub fn new(input: NewCatalogItem) -> DomainResult<Self> {
        if input.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if input.image_src.trim().is_empty() {
            return Err(DomainError::validation("image_src cannot be empty"));
        }
        if let Some(sale) = input.sale_price {
            if sale >= input.price {
                tracing::debug!(
                    slug = %input.slug,
                    price = input.price.get(),
                    sale_price = sale.get(),
                    "sale price is not below regular price"
                );
            }
        }

        Ok(Self {
            slug: input.slug,
            name: input.name,
            image_src: input.image_src,
            price: input.price,
            sale_price: input.sale_price,
            release_date: input.release_date,
            num_of_colors: input.num_of_colors,
        })
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_src(&self) -> &str {
        &self.image_src
    }

    pub fn price(&self) -> MinorUnits {
        self.price
    }

    pub fn sale_price(&self) -> Option<MinorUnits> {
        self.sale_price
    }

    pub fn release_date(&self) -> DateTime<Utc> {
        self.release_date
    }

    pub fn num_of_colors(&self) -> u32 {
        self.num_of_colors
    }

    /// Display variant of this item as seen at `now`.
    pub fn variant(&self, now: DateTime<Utc>, window: RecencyWindow) -> DisplayVariant {
        classify(self.sale_price, self.release_date, now, window)
    }
}

/// Wire shape of a catalog entry (camelCase JSON).
///
/// Deserializing a record does not validate it; convert with `TryFrom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemRecord {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: i64,
    #[serde(default)]
    pub sale_price: Option<i64>,
    pub release_date: DateTime<Utc>,
    pub num_of_colors: i64,
}

impl TryFrom<CatalogItemRecord> for CatalogItem {
    type Error = DomainError;

    fn try_from(record: CatalogItemRecord) -> Result<Self, Self::Error> {
        let num_of_colors = u32::try_from(record.num_of_colors).map_err(|_| {
            DomainError::validation(format!(
                "numOfColors must be a non-negative integer (got {})",
                record.num_of_colors
            ))
        })?;

        CatalogItem::new(NewCatalogItem {
            slug: Slug::parse(record.slug)?,
            name: record.name,
            image_src: record.image_src,
            price: MinorUnits::try_from(record.price)?,
            sale_price: record.sale_price.map(MinorUnits::try_from).transpose()?,
            release_date: record.release_date,
            num_of_colors,
        })
    }
}

impl From<&CatalogItem> for CatalogItemRecord {
    fn from(item: &CatalogItem) -> Self {
        Self {
            slug: item.slug.to_string(),
            name: item.name.clone(),
            image_src: item.image_src.clone(),
            price: i64::try_from(item.price.get()).unwrap_or(i64::MAX),
            sale_price: item
                .sale_price
                .map(|s| i64::try_from(s.get()).unwrap_or(i64::MAX)),
            release_date: item.release_date,
            num_of_colors: i64::from(item.num_of_colors),
        }
    }
}
