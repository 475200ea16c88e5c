pub mod accounts;
pub mod auth;
pub mod campaign;
pub mod client;
pub mod config;
pub mod task;
