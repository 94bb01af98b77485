#[derive(Clone, Debug)]
pub struct CancelBookingCommand {
    pub booking_id: i64,
    pub mfa_code: Option<String>,
}
