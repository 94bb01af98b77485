use chrono::{DateTime, Utc};

use crate::bookings::domain::model::{
    enums::bookings_domain_error::BookingsDomainError, value_objects::time_slot::TimeSlot,
};

#[derive(Clone, Debug)]
pub struct CheckAvailabilityQuery {
    room_id: i64,
    slot: TimeSlot,
}

pub struct CheckAvailabilityQueryParts {
    pub room_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl CheckAvailabilityQuery {
    pub fn new(parts: CheckAvailabilityQueryParts) -> Result<Self, BookingsDomainError> {
        Ok(Self {
            room_id: parts.room_id,
            slot: TimeSlot::new(parts.start_time, parts.end_time)?,
        })
    }

    pub fn room_id(&self) -> i64 {
        self.room_id
    }

    pub fn slot(&self) -> &TimeSlot {
        &self.slot
    }
}
