// Chart specification domain models
//
// A ChartSpec is a fully-resolved, renderer-agnostic description of one
// chart (axes, plot lines, series), ready to be handed to the drawing
// library. Specs are built fresh per render and never mutated afterwards.
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub kind: ChartKind,
    /// Rendering surface height in pixels; None lets the renderer decide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_border: Option<PlotBorder>,
    pub x_axis: XAxis,
    pub y_axes: Vec<YAxis>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    XRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotBorder {
    pub color: String,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxis {
    pub allow_decimals: bool,
    /// Seconds between ticks.
    pub tick_interval: u32,
    pub label_format: TickLabelFormat,
    pub plot_lines: Vec<PlotLine>,
}

/// How the renderer turns a numeric tick value into label text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TickLabelFormat {
    /// Whole hours with an "h" suffix, see `time_axis::format_hour_label`.
    Hours,
}

/// Vertical reference marker on the time axis (downtime or "now").
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotLine {
    pub value: f64,
    pub color: String,
    pub dash_style: DashStyle,
    pub width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<PlotLineLabel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DashStyle {
    LongDash,
    Dot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotLineLabel {
    pub text: String,
    pub color: String,
    pub vertical_align: VerticalAlign,
    pub text_align: TextAlign,
}

/// Label anchor positions; only the subset the dashboard uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum YAxis {
    /// Value axis. `id` is referenced by series sharing it.
    #[serde(rename_all = "camelCase")]
    Linear {
        id: String,
        title: String,
        /// Drawn on the right-hand side when true.
        opposite: bool,
    },
    /// Category axis, one category per availability row.
    #[serde(rename_all = "camelCase")]
    Category {
        categories: Vec<String>,
        /// First category drawn at the top.
        reversed: bool,
        tick_interval: u32,
        tick_amount: usize,
        /// Every category keeps its label even when labels collide.
        allow_label_overlap: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Series {
    #[serde(rename_all = "camelCase")]
    Line {
        name: String,
        color: String,
        y_axis: String,
        points: Vec<Point>,
    },
    #[serde(rename_all = "camelCase")]
    Column {
        name: String,
        color: String,
        y_axis: String,
        opacity: f64,
        /// Width of one bar on the x axis, in seconds.
        point_range: u32,
        point_placement: PointPlacement,
        points: Vec<Point>,
    },
    #[serde(rename_all = "camelCase")]
    Range {
        name: String,
        /// Fixed pixel width of every block, independent of data width.
        point_width: u32,
        point_padding: f64,
        group_padding: f64,
        border_width: u32,
        blocks: Vec<RangeBlock>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PointPlacement {
    /// Bar centered between its tick and the next one.
    Between,
}

/// One availability block with its resolved state color. Serialized with
/// the range-chart point field names the renderer expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeBlock {
    #[serde(rename = "x")]
    pub start: f64,
    #[serde(rename = "x2")]
    pub end: f64,
    #[serde(rename = "y")]
    pub row: usize,
    pub color: String,
}
