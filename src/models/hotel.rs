use serde::{Deserialize, Serialize};

use crate::models::destination::CatalogImage;

/// A hotel listing for a city. `amenities` and `price_range` are free text
/// from the catalog, not structured data.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub owner_name: String,
    pub contact: String,
    pub address: String,
    pub amenities: String,
    pub price_range: String,
    #[serde(default)]
    pub images: Vec<CatalogImage>,
}

impl Hotel {
    /// URL of the card image, when the listing has one.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(|image| image.image.as_str())
    }
}
