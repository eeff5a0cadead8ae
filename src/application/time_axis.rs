// Time axis formatting - hour tick labels and vertical reference lines
use crate::domain::chart::{DashStyle, PlotLine, PlotLineLabel, TextAlign, VerticalAlign};
use crate::infrastructure::config::ThemeConfig;

/// Seconds per x-axis tick: one tick per hour.
pub const HOUR: u32 = 3600;

/// Format a second-based axis value as a whole-hour label, e.g. "2h".
/// Rounds half away from zero, so 5400 becomes "2h".
pub fn format_hour_label(seconds: f64) -> String {
    format!("{}h", (seconds / f64::from(HOUR)).round())
}

/// Build the vertical reference lines shared by both dashboard charts:
/// one long-dash marker per downtime, then a single dotted "now" marker.
/// Downtimes come first so "now" is drawn on top; duplicate downtime
/// values are kept as-is.
pub fn build_plot_lines(downtimes: &[f64], now: f64, theme: &ThemeConfig) -> Vec<PlotLine> {
    let mut lines: Vec<PlotLine> = downtimes
        .iter()
        .map(|&value| PlotLine {
            value,
            color: theme.accent2.clone(),
            dash_style: DashStyle::LongDash,
            width: 1,
            label: None,
        })
        .collect();

    lines.push(PlotLine {
        value: now,
        color: theme.accent1.clone(),
        dash_style: DashStyle::Dot,
        width: 1,
        label: Some(PlotLineLabel {
            text: "now".to_string(),
            color: theme.accent1.clone(),
            vertical_align: VerticalAlign::Top,
            text_align: TextAlign::Left,
        }),
    });

    lines
}
