// Chart build error kinds
use thiserror::Error;

/// Failures surfaced by the chart-building core. The core never recovers
/// from bad input: a visible failure beats a wrong chart.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("invalid availability state code {0} (expected 0, 1 or 2)")]
    InvalidStateCode(i64),

    #[error("render backend failure: {0}")]
    RenderBackend(String),
}
