use std::sync::Mutex;

use async_trait::async_trait;
use meeting_rooms_api::rooms::{
    domain::model::enums::rooms_domain_error::RoomsDomainError,
    infrastructure::persistence::repositories::room_repository::{
        NewRoomRecord, RoomRecord, RoomRepository, RoomUpdate,
    },
};

#[derive(Default)]
struct FakeRoomState {
    rooms: Vec<RoomRecord>,
    next_id: i64,
    insert_calls: usize,
}

pub struct FakeRoomRepository {
    state: Mutex<FakeRoomState>,
}

impl FakeRoomRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeRoomState {
                rooms: Vec::new(),
                next_id: 1,
                insert_calls: 0,
            }),
        }
    }

    pub fn seed_room(&self, room: RoomRecord) {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.next_id = state.next_id.max(room.id + 1);
        state.rooms.push(room);
    }

    pub fn rooms(&self) -> Vec<RoomRecord> {
        self.state.lock().expect("mutex poisoned").rooms.clone()
    }

    pub fn insert_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").insert_calls
    }
}

#[async_trait]
impl RoomRepository for FakeRoomRepository {
    async fn insert_room(&self, new_room: NewRoomRecord) -> Result<RoomRecord, RoomsDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.insert_calls += 1;

        let record = RoomRecord {
            id: state.next_id,
            name: new_room.name,
            capacity: new_room.capacity,
            equipment: new_room.equipment,
            location: new_room.location,
            available: true,
        };
        state.next_id += 1;
        state.rooms.push(record.clone());

        Ok(record)
    }

    async fn find_by_id(&self, room_id: i64) -> Result<Option<RoomRecord>, RoomsDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state.rooms.iter().find(|room| room.id == room_id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<RoomRecord>, RoomsDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Ok(state.rooms.iter().find(|room| room.name == name).cloned())
    }

    async fn list_rooms(&self) -> Result<Vec<RoomRecord>, RoomsDomainError> {
        Ok(self.state.lock().expect("mutex poisoned").rooms.clone())
    }

    async fn update_room(
        &self,
        room_id: i64,
        update: RoomUpdate,
    ) -> Result<RoomRecord, RoomsDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");

        let room = state
            .rooms
            .iter_mut()
            .find(|room| room.id == room_id)
            .ok_or(RoomsDomainError::RoomNotFound)?;

        if let Some(name) = update.name {
            room.name = name;
        }
        if let Some(capacity) = update.capacity {
            room.capacity = capacity;
        }
        if let Some(equipment) = update.equipment {
            room.equipment = equipment;
        }
        if let Some(location) = update.location {
            room.location = location;
        }
        if let Some(available) = update.available {
            room.available = available;
        }

        Ok(room.clone())
    }

    async fn delete_room(&self, room_id: i64) -> Result<(), RoomsDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");

        let before = state.rooms.len();
        state.rooms.retain(|room| room.id != room_id);

        if state.rooms.len() == before {
            return Err(RoomsDomainError::RoomNotFound);
        }

        Ok(())
    }
}
