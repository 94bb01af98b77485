#[path = "support/fakes.rs"]
pub mod fakes;
#[path = "support/fixtures.rs"]
pub mod fixtures;
#[path = "support/harness.rs"]
pub mod harness;

pub use fixtures::{caller, create_command, room_record};
pub use harness::{create_command_harness, create_query_harness};
