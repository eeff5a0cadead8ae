// Availability state color mapping
use crate::domain::error::ChartError;
use crate::infrastructure::config::ThemeConfig;

/// Fixed lookup from availability state code to display color:
/// 0 = unavailable/alert, 1 = degraded/warning, 2 = available/ok.
#[derive(Debug, Clone)]
pub struct StatePalette {
    colors: [String; 3],
}

impl StatePalette {
    pub fn from_theme(theme: &ThemeConfig) -> Self {
        Self {
            colors: [
                theme.state_unavailable.clone(),
                theme.state_degraded.clone(),
                theme.state_available.clone(),
            ],
        }
    }

    /// Out-of-range codes are a contract violation by the data producer
    /// and fail instead of silently defaulting.
    pub fn color_for(&self, state: i64) -> Result<&str, ChartError> {
        usize::try_from(state)
            .ok()
            .and_then(|index| self.colors.get(index))
            .map(String::as_str)
            .ok_or(ChartError::InvalidStateCode(state))
    }
}
