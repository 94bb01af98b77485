pub mod reviews_rest_controller;
