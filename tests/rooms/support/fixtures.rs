use meeting_rooms_api::{
    access_policy::domain::model::value_objects::caller_identity::CallerIdentity,
    rooms::{
        domain::model::commands::create_room_command::{
            CreateRoomCommand, CreateRoomCommandParts,
        },
        infrastructure::persistence::repositories::room_repository::RoomRecord,
    },
};

pub fn caller(role_name: &str, user_id: i64) -> CallerIdentity {
    CallerIdentity::new(role_name, Some(user_id))
}

pub fn create_command(name: &str) -> CreateRoomCommand {
    CreateRoomCommand::new(CreateRoomCommandParts {
        name: name.to_string(),
        capacity: 8,
        equipment: "Projector, Whiteboard".to_string(),
        location: "Building A, Floor 2".to_string(),
    })
    .expect("valid create room command")
}

pub fn room_record(id: i64, name: &str) -> RoomRecord {
    RoomRecord {
        id,
        name: name.to_string(),
        capacity: 8,
        equipment: "Projector, Whiteboard".to_string(),
        location: "Building A, Floor 2".to_string(),
        available: true,
    }
}
