pub mod room_reviews_query;
