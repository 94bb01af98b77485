use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    access_policy::domain::model::{
        enums::role::Role, value_objects::caller_identity::CallerIdentity,
    },
    rooms::{
        domain::{
            model::{
                commands::{
                    create_room_command::CreateRoomCommand,
                    update_room_command::UpdateRoomCommand,
                },
                enums::rooms_domain_error::RoomsDomainError,
            },
            services::rooms_command_service::RoomsCommandService,
        },
        infrastructure::persistence::repositories::room_repository::{
            NewRoomRecord, RoomRecord, RoomRepository, RoomUpdate,
        },
    },
};

pub struct RoomsCommandServiceImpl {
    room_repository: Arc<dyn RoomRepository>,
}

impl RoomsCommandServiceImpl {
    pub fn new(room_repository: Arc<dyn RoomRepository>) -> Self {
        Self { room_repository }
    }

    fn require_room_manager(caller: &CallerIdentity) -> Result<(), RoomsDomainError> {
        match caller.role() {
            Some(Role::Admin) | Some(Role::FacilityManager) => Ok(()),
            _ => Err(RoomsDomainError::AccessDenied(
                "admin or facility manager privileges required".to_string(),
            )),
        }
    }
}

#[async_trait]
impl RoomsCommandService for RoomsCommandServiceImpl {
    async fn handle_create_room(
        &self,
        caller: &CallerIdentity,
        command: CreateRoomCommand,
    ) -> Result<RoomRecord, RoomsDomainError> {
        Self::require_room_manager(caller)?;

        let existing = self
            .room_repository
            .find_by_name(command.name().value())
            .await?;

        if existing.is_some() {
            return Err(RoomsDomainError::DuplicateRoom);
        }

        let record = self
            .room_repository
            .insert_room(NewRoomRecord {
                name: command.name().value().to_string(),
                capacity: command.capacity(),
                equipment: command.equipment().to_string(),
                location: command.location().to_string(),
            })
            .await?;

        info!(room_id = record.id, name = %record.name, "room created");

        Ok(record)
    }

    async fn handle_update_room(
        &self,
        caller: &CallerIdentity,
        command: UpdateRoomCommand,
    ) -> Result<RoomRecord, RoomsDomainError> {
        Self::require_room_manager(caller)?;

        let record = self
            .room_repository
            .update_room(
                command.room_id(),
                RoomUpdate {
                    name: command.name().map(|name| name.value().to_string()),
                    capacity: command.capacity(),
                    equipment: command.equipment().map(str::to_string),
                    location: command.location().map(str::to_string),
                    available: command.available(),
                },
            )
            .await?;

        info!(room_id = record.id, "room updated");

        Ok(record)
    }

    async fn handle_delete_room(
        &self,
        caller: &CallerIdentity,
        room_id: i64,
    ) -> Result<(), RoomsDomainError> {
        Self::require_room_manager(caller)?;

        self.room_repository.delete_room(room_id).await?;

        warn!(room_id, "room deleted");

        Ok(())
    }
}
