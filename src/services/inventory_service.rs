use std::collections::HashMap;

use crate::models::room::Room;
use crate::services::api_client::{ApiError, BookingApiClient};

/// A hotel's rooms partitioned by floor number.
///
/// Every room lands in exactly one group keyed by its floor value; floor
/// keys are sorted ascending rather than left in response order, so the
/// floor rail reads the same regardless of how the backend happens to order
/// the flat list.
#[derive(Debug, Clone, Default)]
pub struct FloorPlan {
    floors: Vec<i32>,
    rooms_by_floor: HashMap<i32, Vec<Room>>,
}

impl FloorPlan {
    pub fn from_rooms(rooms: Vec<Room>) -> Self {
        let mut rooms_by_floor: HashMap<i32, Vec<Room>> = HashMap::new();
        for room in rooms {
            rooms_by_floor.entry(room.floor).or_default().push(room);
        }

        let mut floors: Vec<i32> = rooms_by_floor.keys().copied().collect();
        floors.sort_unstable();

        Self {
            floors,
            rooms_by_floor,
        }
    }

    /// Floor numbers in ascending order.
    pub fn floors(&self) -> &[i32] {
        &self.floors
    }

    /// Rooms grouped under a floor; empty for a floor the hotel does not
    /// have.
    pub fn rooms_on(&self, floor: i32) -> &[Room] {
        self.rooms_by_floor
            .get(&floor)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn total_rooms(&self) -> usize {
        self.rooms_by_floor.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }
}

/// Floor-by-floor room browser for one hotel.
#[derive(Debug, Clone)]
pub struct RoomInventory {
    plan: FloorPlan,
    selected_floor: Option<i32>,
}

impl RoomInventory {
    pub fn new(rooms: Vec<Room>) -> Self {
        let plan = FloorPlan::from_rooms(rooms);
        let selected_floor = plan.floors().first().copied();
        Self {
            plan,
            selected_floor,
        }
    }

    /// Fetch a hotel's rooms and build the inventory. The lowest floor is
    /// selected initially; an empty room list leaves no selection.
    pub async fn load(client: &BookingApiClient, hotel_id: i64) -> Result<Self, ApiError> {
        let rooms = client.rooms(hotel_id).await?;
        println!("Fetched {} rooms for hotel {}", rooms.len(), hotel_id);
        Ok(Self::new(rooms))
    }

    pub fn floor_plan(&self) -> &FloorPlan {
        &self.plan
    }

    pub fn floors(&self) -> &[i32] {
        self.plan.floors()
    }

    pub fn selected_floor(&self) -> Option<i32> {
        self.selected_floor
    }

    pub fn select_floor(&mut self, floor: i32) {
        self.selected_floor = Some(floor);
    }

    /// Rooms on the active floor; empty when nothing is selected or the
    /// selected floor has no rooms.
    pub fn current_rooms(&self) -> &[Room] {
        match self.selected_floor {
            Some(floor) => self.plan.rooms_on(floor),
            None => &[],
        }
    }

    pub fn room(&self, room_id: i64) -> Option<&Room> {
        self.plan
            .floors
            .iter()
            .flat_map(|floor| self.plan.rooms_on(*floor))
            .find(|room| room.id == room_id)
    }
}
