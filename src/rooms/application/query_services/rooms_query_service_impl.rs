use std::sync::Arc;

use async_trait::async_trait;

use crate::rooms::{
    domain::{
        model::enums::rooms_domain_error::RoomsDomainError,
        services::rooms_query_service::RoomsQueryService,
    },
    infrastructure::persistence::repositories::room_repository::{RoomRecord, RoomRepository},
};

pub struct RoomsQueryServiceImpl {
    room_repository: Arc<dyn RoomRepository>,
}

impl RoomsQueryServiceImpl {
    pub fn new(room_repository: Arc<dyn RoomRepository>) -> Self {
        Self { room_repository }
    }
}

#[async_trait]
impl RoomsQueryService for RoomsQueryServiceImpl {
    async fn handle_list_rooms(&self) -> Result<Vec<RoomRecord>, RoomsDomainError> {
        self.room_repository.list_rooms().await
    }

    async fn handle_get_room(&self, room_id: i64) -> Result<RoomRecord, RoomsDomainError> {
        self.room_repository
            .find_by_id(room_id)
            .await?
            .ok_or(RoomsDomainError::RoomNotFound)
    }
}
