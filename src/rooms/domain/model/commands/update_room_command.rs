use crate::rooms::domain::model::{
    enums::rooms_domain_error::RoomsDomainError, value_objects::room_name::RoomName,
};

#[derive(Clone, Debug)]
pub struct UpdateRoomCommand {
    room_id: i64,
    name: Option<RoomName>,
    capacity: Option<i32>,
    equipment: Option<String>,
    location: Option<String>,
    available: Option<bool>,
}

pub struct UpdateRoomCommandParts {
    pub room_id: i64,
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub equipment: Option<String>,
    pub location: Option<String>,
    pub available: Option<bool>,
}

impl UpdateRoomCommand {
    pub fn new(parts: UpdateRoomCommandParts) -> Result<Self, RoomsDomainError> {
        if let Some(capacity) = parts.capacity {
            if capacity < 1 {
                return Err(RoomsDomainError::InvalidCapacity);
            }
        }
        Ok(Self {
            room_id: parts.room_id,
            name: parts.name.map(RoomName::new).transpose()?,
            capacity: parts.capacity,
            equipment: parts.equipment,
            location: parts.location,
            available: parts.available,
        })
    }

    pub fn room_id(&self) -> i64 {
        self.room_id
    }

    pub fn name(&self) -> Option<&RoomName> {
        self.name.as_ref()
    }

    pub fn capacity(&self) -> Option<i32> {
        self.capacity
    }

    pub fn equipment(&self) -> Option<&str> {
        self.equipment.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn available(&self) -> Option<bool> {
        self.available
    }
}
