use chrono::{DateTime, TimeZone, Utc};
use meeting_rooms_api::{
    access_policy::domain::model::value_objects::caller_identity::CallerIdentity,
    bookings::{
        domain::model::{
            commands::{
                cancel_booking_command::CancelBookingCommand,
                create_booking_command::{CreateBookingCommand, CreateBookingCommandParts},
            },
            enums::booking_status::BookingStatus,
            value_objects::time_slot::TimeSlot,
        },
        infrastructure::persistence::repositories::booking_repository::BookingRecord,
    },
};

pub const MFA_CODE: &str = "123456";
pub const ROOM_A: i64 = 1;

pub fn ts(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 26, hour, minute, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub fn slot(start_hour: u32, end_hour: u32) -> TimeSlot {
    TimeSlot::new(ts(start_hour, 0), ts(end_hour, 0)).expect("valid fixture slot")
}

pub fn caller(role_name: &str, user_id: i64) -> CallerIdentity {
    CallerIdentity::new(role_name, Some(user_id))
}

pub fn create_command(
    user_id: i64,
    room_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> CreateBookingCommand {
    CreateBookingCommand::new(CreateBookingCommandParts {
        user_id,
        room_id,
        start_time: start,
        end_time: end,
    })
    .expect("valid create command")
}

pub fn cancel_command(booking_id: i64, mfa_code: Option<&str>) -> CancelBookingCommand {
    CancelBookingCommand {
        booking_id,
        mfa_code: mfa_code.map(str::to_string),
    }
}

pub fn booking_record(
    id: i64,
    user_id: i64,
    room_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: BookingStatus,
) -> BookingRecord {
    BookingRecord {
        id,
        user_id,
        room_id,
        start_time: start,
        end_time: end,
        status,
        created_at: ts(8, 0),
    }
}
