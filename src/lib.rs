pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod localization;
pub mod upload;
pub mod utils;
