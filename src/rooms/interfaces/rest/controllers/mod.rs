pub mod rooms_rest_controller;
