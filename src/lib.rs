pub mod actions;
pub mod config;
pub mod endpoints;
pub mod logging;
pub mod models;
pub mod ui;
