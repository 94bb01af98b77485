use crate::bookings::{
    domain::model::{enums::booking_status::BookingStatus, value_objects::time_slot::TimeSlot},
    infrastructure::persistence::repositories::booking_repository::BookingRecord,
};

pub struct BookingConflictChecker;

impl BookingConflictChecker {
    pub fn has_conflict(
        room_id: i64,
        proposed: &TimeSlot,
        existing: &[BookingRecord],
        exclude_booking_id: Option<i64>,
    ) -> bool {
        existing
            .iter()
            .filter(|booking| booking.room_id == room_id)
            .filter(|booking| booking.status == BookingStatus::Confirmed)
            .filter(|booking| Some(booking.id) != exclude_booking_id)
            .filter_map(|booking| TimeSlot::new(booking.start_time, booking.end_time).ok())
            .any(|slot| proposed.overlaps(&slot))
    }
}
