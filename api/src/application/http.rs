pub mod food_analysis;
pub mod health;
pub mod server;
pub mod user;
