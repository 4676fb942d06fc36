pub mod app;
pub mod setup;
