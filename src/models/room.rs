use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Listings without a photo fall back to this card image.
pub const ROOM_IMAGE_PLACEHOLDER: &str = "https://via.placeholder.com/150";

/// Availability of a room.
///
/// The wire encoding is a string sentinel: exactly `"No"` means available
/// and `"Yes"` means booked. Anything else the server sends decodes to
/// `Unknown`, which is never treated as available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Available,
    Booked,
    Unknown,
}

impl<'de> Deserialize<'de> for RoomStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "No" => RoomStatus::Available,
            "Yes" => RoomStatus::Booked,
            _ => RoomStatus::Unknown,
        })
    }
}

impl Serialize for RoomStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let sentinel = match self {
            RoomStatus::Available => "No",
            RoomStatus::Booked => "Yes",
            RoomStatus::Unknown => "Unknown",
        };
        serializer.serialize_str(sentinel)
    }
}

/// A room within a hotel. `price` is the nightly rate; the currency minor
/// unit is not specified by the API and amounts are displayed in ₹ as-is.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Room {
    pub id: i64,
    pub floor: i32,
    pub room_number: String,
    pub type_of_room: String,
    pub capacity: u16,
    pub price: f64,
    pub status: RoomStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Room {
    pub fn is_available(&self) -> bool {
        self.status == RoomStatus::Available
    }

    pub fn image_url(&self) -> &str {
        self.image.as_deref().unwrap_or(ROOM_IMAGE_PLACEHOLDER)
    }
}
