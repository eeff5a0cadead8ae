// HTTP request handlers
//
// The chart handlers are the thin adapter between the build functions and
// the external drawing library: each one serializes a finished ChartSpec
// and hands it over, consuming nothing back.
use crate::domain::error::ChartError;
use crate::presentation::app_state::AppState;
use crate::presentation::lifecycle::PageEvent;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Both chart specifications for the dashboard page.
pub async fn dashboard_charts(State(state): State<Arc<AppState>>) -> Response {
    match state.chart_service.dashboard_charts() {
        Ok(charts) => chart_response(&charts),
        Err(e) => chart_error_response(e),
    }
}

pub async fn stock_rate_chart(State(state): State<Arc<AppState>>) -> Response {
    match state.chart_service.stock_rate_chart() {
        Ok(spec) => chart_response(&spec),
        Err(e) => chart_error_response(e),
    }
}

pub async fn availability_chart(State(state): State<Arc<AppState>>) -> Response {
    match state.chart_service.availability_chart() {
        Ok(spec) => chart_response(&spec),
        Err(e) => chart_error_response(e),
    }
}

fn chart_response<T: Serialize>(spec: &T) -> Response {
    // explicit serialization so a backend failure surfaces as its own kind
    match serde_json::to_value(spec) {
        Ok(json) => Json(json).into_response(),
        Err(e) => chart_error_response(ChartError::RenderBackend(e.to_string())),
    }
}

fn chart_error_response(e: ChartError) -> Response {
    // the dashboard shows an error state rather than a wrong chart
    tracing::error!("chart build failed: {e}");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
}

/// Current form state. Publishing Ready first lets the sync bridge restore
/// persisted values into empty fields, as on a fresh page load.
pub async fn page_state(State(state): State<Arc<AppState>>) -> Response {
    state.bus.publish(&PageEvent::Ready);
    Json(state.page.forms()).into_response()
}

#[derive(Deserialize)]
pub struct FieldChange {
    pub key: String,
    pub value: String,
}

pub async fn field_changed(
    State(state): State<Arc<AppState>>,
    Json(change): Json<FieldChange>,
) -> StatusCode {
    state.bus.publish(&PageEvent::FieldChanged {
        key: change.key,
        value: change.value,
    });
    StatusCode::NO_CONTENT
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct PageShow {
    /// True when the page came back out of a navigation cache.
    pub persisted: bool,
    pub back_forward: bool,
}

pub async fn page_show(
    State(state): State<Arc<AppState>>,
    Json(show): Json<PageShow>,
) -> StatusCode {
    state.bus.publish(&PageEvent::PageShow {
        restored_from_cache: show.persisted,
        back_forward: show.back_forward,
    });
    StatusCode::NO_CONTENT
}
