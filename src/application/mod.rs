// Application layer - chart building use cases and trait seams
pub mod chart_service;
pub mod series_builder;
pub mod session_store;
pub mod snapshot_repository;
pub mod state_color;
pub mod time_axis;
