use async_trait::async_trait;

use crate::rooms::domain::model::enums::rooms_domain_error::RoomsDomainError;

#[derive(Clone, Debug)]
pub struct RoomRecord {
    pub id: i64,
    pub name: String,
    pub capacity: i32,
    pub equipment: String,
    pub location: String,
    pub available: bool,
}

#[derive(Clone, Debug)]
pub struct NewRoomRecord {
    pub name: String,
    pub capacity: i32,
    pub equipment: String,
    pub location: String,
}

#[derive(Clone, Debug)]
pub struct RoomUpdate {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub equipment: Option<String>,
    pub location: Option<String>,
    pub available: Option<bool>,
}

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn insert_room(&self, new_room: NewRoomRecord) -> Result<RoomRecord, RoomsDomainError>;

    async fn find_by_id(&self, room_id: i64) -> Result<Option<RoomRecord>, RoomsDomainError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<RoomRecord>, RoomsDomainError>;

    async fn list_rooms(&self) -> Result<Vec<RoomRecord>, RoomsDomainError>;

    async fn update_room(
        &self,
        room_id: i64,
        update: RoomUpdate,
    ) -> Result<RoomRecord, RoomsDomainError>;

    async fn delete_room(&self, room_id: i64) -> Result<(), RoomsDomainError>;
}
