#[path = "support/fixtures.rs"]
pub mod fixtures;
#[path = "support/harness.rs"]
pub mod harness;

pub use fixtures::{
    MFA_CODE, booking_record, caller, cancel_command, create_command, slot, ts,
};
pub use harness::{create_command_harness, create_query_harness};
