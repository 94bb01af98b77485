pub mod create_room_command;
pub mod update_room_command;
