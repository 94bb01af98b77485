use chrono::{DateTime, Utc};

#[derive(Clone, Debug)]
pub struct UpdateBookingCommand {
    pub booking_id: i64,
    pub room_id: Option<i64>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}
