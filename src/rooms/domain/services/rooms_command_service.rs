use async_trait::async_trait;

use crate::{
    access_policy::domain::model::value_objects::caller_identity::CallerIdentity,
    rooms::{
        domain::model::{
            commands::{
                create_room_command::CreateRoomCommand, update_room_command::UpdateRoomCommand,
            },
            enums::rooms_domain_error::RoomsDomainError,
        },
        infrastructure::persistence::repositories::room_repository::RoomRecord,
    },
};

#[async_trait]
pub trait RoomsCommandService: Send + Sync {
    async fn handle_create_room(
        &self,
        caller: &CallerIdentity,
        command: CreateRoomCommand,
    ) -> Result<RoomRecord, RoomsDomainError>;

    async fn handle_update_room(
        &self,
        caller: &CallerIdentity,
        command: UpdateRoomCommand,
    ) -> Result<RoomRecord, RoomsDomainError>;

    async fn handle_delete_room(
        &self,
        caller: &CallerIdentity,
        room_id: i64,
    ) -> Result<(), RoomsDomainError>;
}
