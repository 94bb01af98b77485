#[derive(Clone, Debug)]
pub struct UserBookingHistoryQuery {
    pub user_id: i64,
}
