// Repository trait for loading the telemetry payload
use crate::domain::snapshot::TelemetrySnapshot;
use async_trait::async_trait;

#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Decode the raw telemetry payload. Called once at startup.
    async fn load_snapshot(&self) -> anyhow::Result<TelemetrySnapshot>;
}
