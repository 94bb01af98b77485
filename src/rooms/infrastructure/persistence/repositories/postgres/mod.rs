pub mod sqlx_room_repository_impl;
