#[derive(Clone, Debug)]
pub struct RoomReviewsQuery {
    pub room_id: i64,
}
