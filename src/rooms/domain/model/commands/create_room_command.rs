use crate::rooms::domain::model::{
    enums::rooms_domain_error::RoomsDomainError, value_objects::room_name::RoomName,
};

#[derive(Clone, Debug)]
pub struct CreateRoomCommand {
    name: RoomName,
    capacity: i32,
    equipment: String,
    location: String,
}

pub struct CreateRoomCommandParts {
    pub name: String,
    pub capacity: i32,
    pub equipment: String,
    pub location: String,
}

impl CreateRoomCommand {
    pub fn new(parts: CreateRoomCommandParts) -> Result<Self, RoomsDomainError> {
        if parts.capacity < 1 {
            return Err(RoomsDomainError::InvalidCapacity);
        }
        Ok(Self {
            name: RoomName::new(parts.name)?,
            capacity: parts.capacity,
            equipment: parts.equipment,
            location: parts.location,
        })
    }

    pub fn name(&self) -> &RoomName {
        &self.name
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    pub fn equipment(&self) -> &str {
        &self.equipment
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}
