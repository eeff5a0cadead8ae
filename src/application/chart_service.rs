// Chart service - use case turning the startup snapshot into chart specs
use crate::application::series_builder;
use crate::application::time_axis;
use crate::domain::chart::ChartSpec;
use crate::domain::error::ChartError;
use crate::domain::snapshot::TelemetrySnapshot;
use crate::infrastructure::config::ThemeConfig;
use serde::Serialize;
use std::sync::Arc;

/// The dashboard's two charts, built from one snapshot, plus the palette
/// the page applies around them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCharts {
    pub theme: ThemeConfig,
    pub stock_rate: ChartSpec,
    pub availability: ChartSpec,
}

#[derive(Clone)]
pub struct ChartService {
    snapshot: Arc<TelemetrySnapshot>,
    theme: ThemeConfig,
}

impl ChartService {
    pub fn new(snapshot: TelemetrySnapshot, theme: ThemeConfig) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            theme,
        }
    }

    /// Build both chart specifications. Every call produces a fresh,
    /// independent pair.
    pub fn dashboard_charts(&self) -> Result<DashboardCharts, ChartError> {
        tracing::debug!(
            "building dashboard charts at {} event time",
            time_axis::format_hour_label(self.snapshot.now)
        );

        Ok(DashboardCharts {
            theme: self.theme.clone(),
            stock_rate: self.stock_rate_chart()?,
            availability: self.availability_chart()?,
        })
    }

    pub fn stock_rate_chart(&self) -> Result<ChartSpec, ChartError> {
        series_builder::build_stock_rate_spec(&self.snapshot, &self.theme)
    }

    pub fn availability_chart(&self) -> Result<ChartSpec, ChartError> {
        series_builder::build_availability_spec(&self.snapshot, &self.theme)
    }
}
