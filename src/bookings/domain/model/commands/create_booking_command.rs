use chrono::{DateTime, Utc};

use crate::bookings::domain::model::{
    enums::bookings_domain_error::BookingsDomainError, value_objects::time_slot::TimeSlot,
};

#[derive(Clone, Debug)]
pub struct CreateBookingCommand {
    user_id: i64,
    room_id: i64,
    slot: TimeSlot,
}

pub struct CreateBookingCommandParts {
    pub user_id: i64,
    pub room_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl CreateBookingCommand {
    pub fn new(parts: CreateBookingCommandParts) -> Result<Self, BookingsDomainError> {
        Ok(Self {
            user_id: parts.user_id,
            room_id: parts.room_id,
            slot: TimeSlot::new(parts.start_time, parts.end_time)?,
        })
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn room_id(&self) -> i64 {
        self.room_id
    }

    pub fn slot(&self) -> &TimeSlot {
        &self.slot
    }
}
