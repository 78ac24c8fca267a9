pub mod api;
pub mod clients;
pub mod config;
pub mod dispatch;
pub mod models;
pub mod scheduler;
pub mod utils;
