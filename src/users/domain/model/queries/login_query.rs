#[derive(Clone, Debug)]
pub struct LoginQuery {
    pub username: String,
    pub password: String,
}
