// JSON snapshot repository - decodes the embedded telemetry payload
use crate::application::snapshot_repository::SnapshotRepository;
use crate::domain::snapshot::TelemetrySnapshot;
use async_trait::async_trait;
use std::path::PathBuf;

pub struct JsonSnapshotRepository {
    path: PathBuf,
}

impl JsonSnapshotRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotRepository for JsonSnapshotRepository {
    async fn load_snapshot(&self) -> anyhow::Result<TelemetrySnapshot> {
        let raw = tokio::fs::read(&self.path).await?;
        let snapshot: TelemetrySnapshot = serde_json::from_slice(&raw)?;

        tracing::debug!(
            "decoded snapshot from {}: {} stock samples, {} availability rows",
            self.path.display(),
            snapshot.remaining_stock.len(),
            snapshot.availabilities.len()
        );

        Ok(snapshot)
    }
}
