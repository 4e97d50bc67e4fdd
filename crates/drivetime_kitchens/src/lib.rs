pub mod kitchen;
pub mod kitchen_client;
pub mod opening_hours;
