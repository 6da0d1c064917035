pub mod app;
pub mod apps;
pub mod config;
pub mod news;
