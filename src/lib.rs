pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod repositories;
