pub mod argon2_password_hasher_impl;
pub mod password_hasher;
