pub mod health;
pub mod stores;
pub mod uploads;
pub mod users;
pub mod weather;
