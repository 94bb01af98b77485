use async_trait::async_trait;

use crate::rooms::{
    domain::model::enums::rooms_domain_error::RoomsDomainError,
    infrastructure::persistence::repositories::room_repository::RoomRecord,
};

#[async_trait]
pub trait RoomsQueryService: Send + Sync {
    async fn handle_list_rooms(&self) -> Result<Vec<RoomRecord>, RoomsDomainError>;

    async fn handle_get_room(&self, room_id: i64) -> Result<RoomRecord, RoomsDomainError>;
}
