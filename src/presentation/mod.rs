// Presentation layer - HTTP surface and page lifecycle glue
pub mod app_state;
pub mod bridges;
pub mod handlers;
pub mod lifecycle;
pub mod page;
