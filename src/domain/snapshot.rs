// Telemetry snapshot domain models
use serde::Deserialize;

/// One immutable telemetry payload for a single dashboard render.
/// Decoded once from the embedded JSON blob; field names follow the
/// payload convention.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetrySnapshot {
    pub remaining_stock: Vec<f64>,
    pub sale_rate: Vec<f64>,
    /// Current event time, in seconds.
    pub now: f64,
    /// Service downtime markers, in seconds.
    pub downtimes: Vec<f64>,
    pub availabilities: Vec<AvailabilityRow>,
}

/// One named category (e.g. a product variation) whose availability over
/// time is shown as a horizontal timeline.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityRow {
    pub variation: String,
    pub timeline: Vec<Interval>,
}

/// One availability window. `row` must equal the index of the owning row
/// in `availabilities`; `state` must be one of 0 (unavailable),
/// 1 (few left) or 2 (available).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Interval {
    #[serde(rename = "x")]
    pub start: f64,
    #[serde(rename = "x2")]
    pub end: f64,
    #[serde(rename = "y")]
    pub row: usize,
    #[serde(rename = "v")]
    pub state: i64,
}
