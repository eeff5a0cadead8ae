// Series builder - turns one telemetry snapshot into chart specifications
//
// Both build functions are pure: same snapshot and theme in, structurally
// identical ChartSpec out. A malformed snapshot fails fast with a
// descriptive error; there is no partial chart.
use crate::application::state_color::StatePalette;
use crate::application::time_axis::{self, HOUR};
use crate::domain::chart::{
    ChartKind, ChartSpec, Point, PointPlacement, PlotBorder, RangeBlock, Series, TickLabelFormat,
    XAxis, YAxis,
};
use crate::domain::error::ChartError;
use crate::domain::snapshot::TelemetrySnapshot;
use crate::infrastructure::config::ThemeConfig;
use std::collections::HashSet;

/// First x value of the stock line. Inherited from the original dashboard;
/// the intent behind the exact number is unrecorded, so it stays as-is.
const STOCK_POINT_START: f64 = 1940.0;

/// Opacity of the sale-rate bars, keeping the stock line readable on top.
const RATE_OPACITY: f64 = 0.7;

/// Vertical pixel band per availability row.
const ROW_BAND: u32 = 10;

/// Fixed margin added to the availability chart height.
const HEIGHT_MARGIN: u32 = 30;

/// Fixed pixel width of one availability block. Blocks are positioned at
/// their start value, not stretched to the end value.
const BLOCK_WIDTH: u32 = 10;

/// Build the dual-axis stock/rate chart: a stock line on the left axis and
/// hourly sale-rate bars on the right axis, sharing one hour-ticked x axis.
pub fn build_stock_rate_spec(
    snapshot: &TelemetrySnapshot,
    theme: &ThemeConfig,
) -> Result<ChartSpec, ChartError> {
    validate_markers(snapshot)?;
    validate_samples("remainingStock", &snapshot.remaining_stock)?;
    validate_samples("saleRate", &snapshot.sale_rate)?;

    // The stock line lives in per-sample index space starting at 1940,
    // one x unit per sample, even though the axis ticks are hourly.
    let stock_points: Vec<Point> = snapshot
        .remaining_stock
        .iter()
        .enumerate()
        .map(|(i, &y)| Point {
            x: STOCK_POINT_START + i as f64,
            y,
        })
        .collect();

    // One bar per hour, spanning exactly that hour.
    let rate_points: Vec<Point> = snapshot
        .sale_rate
        .iter()
        .enumerate()
        .map(|(i, &y)| Point {
            x: i as f64 * f64::from(HOUR),
            y,
        })
        .collect();

    Ok(ChartSpec {
        kind: ChartKind::Line,
        height: None,
        plot_border: Some(PlotBorder {
            color: theme.accent3.clone(),
            width: 1,
        }),
        x_axis: hour_axis(snapshot, theme),
        y_axes: vec![
            YAxis::Linear {
                id: "stock".to_string(),
                title: "Remaining stock".to_string(),
                opposite: false,
            },
            YAxis::Linear {
                id: "rate".to_string(),
                title: "Sales per hour".to_string(),
                opposite: true,
            },
        ],
        series: vec![
            Series::Line {
                name: "Remaining stock".to_string(),
                color: theme.primary.clone(),
                y_axis: "stock".to_string(),
                points: stock_points,
            },
            Series::Column {
                name: "Sale rate".to_string(),
                color: theme.accent2.clone(),
                y_axis: "rate".to_string(),
                opacity: RATE_OPACITY,
                point_range: HOUR,
                point_placement: PointPlacement::Between,
                points: rate_points,
            },
        ],
    })
}

/// Build the categorical availability timeline: one row per variation,
/// its intervals flattened into fixed-width state-colored blocks.
pub fn build_availability_spec(
    snapshot: &TelemetrySnapshot,
    theme: &ThemeConfig,
) -> Result<ChartSpec, ChartError> {
    validate_markers(snapshot)?;

    let palette = StatePalette::from_theme(theme);
    let rows = &snapshot.availabilities;

    let mut seen = HashSet::new();
    for row in rows {
        if !seen.insert(row.variation.as_str()) {
            return Err(ChartError::MalformedSnapshot(format!(
                "duplicate variation label {:?}",
                row.variation
            )));
        }
    }

    // Flatten row by row, then timeline order within a row.
    let mut blocks = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        for interval in &row.timeline {
            if interval.row != index {
                return Err(ChartError::MalformedSnapshot(format!(
                    "interval in row {index} ({:?}) carries row index {}",
                    row.variation, interval.row
                )));
            }
            if !interval.start.is_finite() || !interval.end.is_finite() {
                return Err(ChartError::MalformedSnapshot(format!(
                    "non-finite interval bounds in row {index} ({:?})",
                    row.variation
                )));
            }
            blocks.push(RangeBlock {
                start: interval.start,
                end: interval.end,
                row: interval.row,
                color: palette.color_for(interval.state)?.to_string(),
            });
        }
    }

    Ok(ChartSpec {
        kind: ChartKind::XRange,
        // Each row gets a fixed visual band; height follows data cardinality.
        height: Some(ROW_BAND * rows.len() as u32 + HEIGHT_MARGIN),
        plot_border: None,
        x_axis: hour_axis(snapshot, theme),
        y_axes: vec![YAxis::Category {
            categories: rows.iter().map(|row| row.variation.clone()).collect(),
            reversed: true,
            tick_interval: 1,
            tick_amount: rows.len(),
            allow_label_overlap: true,
        }],
        series: vec![Series::Range {
            name: "Availability".to_string(),
            point_width: BLOCK_WIDTH,
            point_padding: 0.0,
            group_padding: 0.0,
            border_width: 0,
            blocks,
        }],
    })
}

/// Hourly x axis with the downtime/"now" plot lines. Both charts get an
/// independent instance with identical treatment.
fn hour_axis(snapshot: &TelemetrySnapshot, theme: &ThemeConfig) -> XAxis {
    XAxis {
        allow_decimals: false,
        tick_interval: HOUR,
        label_format: TickLabelFormat::Hours,
        plot_lines: time_axis::build_plot_lines(&snapshot.downtimes, snapshot.now, theme),
    }
}

fn validate_samples(field: &str, values: &[f64]) -> Result<(), ChartError> {
    if values.iter().any(|value| !value.is_finite()) {
        return Err(ChartError::MalformedSnapshot(format!(
            "non-finite value in {field}"
        )));
    }
    Ok(())
}

fn validate_markers(snapshot: &TelemetrySnapshot) -> Result<(), ChartError> {
    if !snapshot.now.is_finite() {
        return Err(ChartError::MalformedSnapshot(
            "non-finite now timestamp".to_string(),
        ));
    }
    validate_samples("downtimes", &snapshot.downtimes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::snapshot::{AvailabilityRow, Interval};

    fn snapshot() -> TelemetrySnapshot {
        TelemetrySnapshot {
            remaining_stock: vec![10.0, 8.0, 6.0],
            sale_rate: vec![2.0, 2.0, 1.5, 0.5],
            now: 9000.0,
            downtimes: vec![3600.0, 7200.0],
            availabilities: vec![
                AvailabilityRow {
                    variation: "A".to_string(),
                    timeline: vec![Interval {
                        start: 0.0,
                        end: 10.0,
                        row: 0,
                        state: 2,
                    }],
                },
                AvailabilityRow {
                    variation: "B".to_string(),
                    timeline: vec![],
                },
            ],
        }
    }

    fn theme() -> ThemeConfig {
        ThemeConfig::default()
    }

    #[test]
    fn test_stock_series_index_space() {
        let spec = build_stock_rate_spec(&snapshot(), &theme()).unwrap();
        let Series::Line { points, .. } = &spec.series[0] else {
            panic!("first series should be the stock line");
        };

        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1940.0, 1941.0, 1942.0]);
        assert_eq!(points[0].y, 10.0);
    }

    #[test]
    fn test_rate_bars_hourly() {
        let spec = build_stock_rate_spec(&snapshot(), &theme()).unwrap();
        let Series::Column {
            points,
            point_range,
            point_placement,
            opacity,
            ..
        } = &spec.series[1]
        else {
            panic!("second series should be the rate bars");
        };

        assert_eq!(points.len(), 4);
        assert_eq!(*point_range, 3600);
        assert_eq!(*point_placement, PointPlacement::Between);
        assert_eq!(*opacity, 0.7);
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 3600.0, 7200.0, 10800.0]);
    }

    #[test]
    fn test_stock_rate_axes() {
        let spec = build_stock_rate_spec(&snapshot(), &theme()).unwrap();

        assert_eq!(spec.kind, ChartKind::Line);
        assert!(!spec.x_axis.allow_decimals);
        assert_eq!(spec.x_axis.tick_interval, 3600);
        // downtime markers first, "now" last
        assert_eq!(spec.x_axis.plot_lines.len(), 3);
        assert_eq!(spec.x_axis.plot_lines[2].value, 9000.0);

        let [YAxis::Linear {
            id: left,
            opposite: left_opposite,
            ..
        }, YAxis::Linear {
            id: right,
            opposite: right_opposite,
            ..
        }] = spec.y_axes.as_slice()
        else {
            panic!("expected two linear y axes");
        };
        assert_eq!(left, "stock");
        assert!(!left_opposite);
        assert_eq!(right, "rate");
        assert!(*right_opposite);
    }

    #[test]
    fn test_availability_layout() {
        let spec = build_availability_spec(&snapshot(), &theme()).unwrap();

        assert_eq!(spec.kind, ChartKind::XRange);
        assert_eq!(spec.height, Some(50));

        let YAxis::Category {
            categories,
            reversed,
            tick_interval,
            tick_amount,
            allow_label_overlap,
        } = &spec.y_axes[0]
        else {
            panic!("expected a category y axis");
        };
        assert_eq!(categories, &["A".to_string(), "B".to_string()]);
        assert!(*reversed);
        assert_eq!(*tick_interval, 1);
        assert_eq!(*tick_amount, 2);
        assert!(*allow_label_overlap);

        let Series::Range { blocks, point_width, point_padding, group_padding, .. } =
            &spec.series[0]
        else {
            panic!("expected a range series");
        };
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].row, 0);
        assert_eq!(*point_width, 10);
        assert_eq!(*point_padding, 0.0);
        assert_eq!(*group_padding, 0.0);

        let palette = StatePalette::from_theme(&theme());
        assert_eq!(blocks[0].color, palette.color_for(2).unwrap());
    }

    #[test]
    fn test_availability_flattening_order() {
        let mut data = snapshot();
        data.availabilities = vec![
            AvailabilityRow {
                variation: "A".to_string(),
                timeline: vec![
                    Interval { start: 0.0, end: 10.0, row: 0, state: 2 },
                    Interval { start: 10.0, end: 20.0, row: 0, state: 1 },
                ],
            },
            AvailabilityRow {
                variation: "B".to_string(),
                timeline: vec![Interval { start: 5.0, end: 15.0, row: 1, state: 0 }],
            },
        ];

        let spec = build_availability_spec(&data, &theme()).unwrap();
        let Series::Range { blocks, .. } = &spec.series[0] else {
            panic!("expected a range series");
        };

        let order: Vec<(usize, f64)> = blocks.iter().map(|b| (b.row, b.start)).collect();
        assert_eq!(order, vec![(0, 0.0), (0, 10.0), (1, 5.0)]);
    }

    #[test]
    fn test_empty_availabilities() {
        let mut data = snapshot();
        data.availabilities.clear();

        let spec = build_availability_spec(&data, &theme()).unwrap();
        assert_eq!(spec.height, Some(30));

        let Series::Range { blocks, .. } = &spec.series[0] else {
            panic!("expected a range series");
        };
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_builds_are_idempotent() {
        let data = snapshot();
        let theme = theme();

        assert_eq!(
            build_stock_rate_spec(&data, &theme).unwrap(),
            build_stock_rate_spec(&data, &theme).unwrap()
        );
        assert_eq!(
            build_availability_spec(&data, &theme).unwrap(),
            build_availability_spec(&data, &theme).unwrap()
        );
    }

    #[test]
    fn test_unknown_state_code_fails() {
        let mut data = snapshot();
        data.availabilities[0].timeline[0].state = 5;

        assert!(matches!(
            build_availability_spec(&data, &theme()),
            Err(ChartError::InvalidStateCode(5))
        ));
    }

    #[test]
    fn test_row_index_mismatch_fails() {
        let mut data = snapshot();
        data.availabilities[0].timeline[0].row = 1;

        assert!(matches!(
            build_availability_spec(&data, &theme()),
            Err(ChartError::MalformedSnapshot(_))
        ));
    }

    #[test]
    fn test_duplicate_variation_fails() {
        let mut data = snapshot();
        data.availabilities[1].variation = "A".to_string();
        data.availabilities[1].timeline = vec![];

        assert!(matches!(
            build_availability_spec(&data, &theme()),
            Err(ChartError::MalformedSnapshot(_))
        ));
    }

    #[test]
    fn test_non_finite_samples_fail() {
        let mut data = snapshot();
        data.remaining_stock[1] = f64::NAN;

        assert!(matches!(
            build_stock_rate_spec(&data, &theme()),
            Err(ChartError::MalformedSnapshot(_))
        ));
    }
}
