// Infrastructure layer - external dependencies and adapters
pub mod config;
pub mod json_snapshot;
pub mod memory_store;
