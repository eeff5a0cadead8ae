// Domain layer - telemetry and chart value types
pub mod chart;
pub mod error;
pub mod snapshot;
