use serde::{Deserialize, Serialize};

/// Image record shared by destinations and hotels: `{ id, image }` where
/// `image` is a URL.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CatalogImage {
    pub id: i64,
    pub image: String,
}

/// A popular destination within a city, with an ordered image carousel.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Destination {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub images: Vec<CatalogImage>,
}
