use serde::{Deserialize, Serialize};

/// A city from the catalog. Coordinates arrive as decimal strings on the
/// wire, not numbers.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub lat: String,
    pub long: String,
}

/// One entry in the selectable city rail.
///
/// The device position is its own variant so it can never collide with a
/// catalog city id, and it is never sent to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum CityEntry {
    Catalog(City),
    DeviceLocation { lat: f64, long: f64 },
}

impl CityEntry {
    pub fn display_name(&self) -> &str {
        match self {
            CityEntry::Catalog(city) => &city.name,
            CityEntry::DeviceLocation { .. } => "Your Location",
        }
    }

    /// Catalog id, if this entry is browsable on the backend.
    pub fn catalog_id(&self) -> Option<i64> {
        match self {
            CityEntry::Catalog(city) => Some(city.id),
            CityEntry::DeviceLocation { .. } => None,
        }
    }

    pub fn is_device_location(&self) -> bool {
        matches!(self, CityEntry::DeviceLocation { .. })
    }
}
