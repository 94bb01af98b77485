use chrono::{DateTime, Utc};

use crate::bookings::domain::model::enums::bookings_domain_error::BookingsDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimeSlot {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeSlot {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, BookingsDomainError> {
        if end <= start {
            return Err(BookingsDomainError::InvalidTimeSlot);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }
}
