// Main entry point - dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::application::chart_service::ChartService;
use crate::application::session_store::SessionStore;
use crate::application::snapshot_repository::SnapshotRepository;
use crate::infrastructure::config::{load_service_config, load_theme_config};
use crate::infrastructure::json_snapshot::JsonSnapshotRepository;
use crate::infrastructure::memory_store::MemorySessionStore;
use crate::presentation::app_state::AppState;
use crate::presentation::bridges::{FormSyncBridge, NavigationResetBridge};
use crate::presentation::handlers::{
    availability_chart, dashboard_charts, field_changed, health_check, page_show, page_state,
    stock_rate_chart,
};
use crate::presentation::lifecycle::EventBus;
use crate::presentation::page::PageState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let service_config = load_service_config()?;
    let theme = load_theme_config()?;

    // Decode the telemetry payload once at startup (infrastructure layer)
    let repository = JsonSnapshotRepository::new(&service_config.snapshot.path);
    let snapshot = repository.load_snapshot().await?;

    // Create services (application layer)
    let chart_service = ChartService::new(snapshot, theme);

    // Page state and the optional lifecycle plugins
    let page = PageState::from_config(&service_config.forms);
    let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
    let mut bus = EventBus::new();
    bus.subscribe(Arc::new(FormSyncBridge::new(page.clone(), store)));
    bus.subscribe(Arc::new(NavigationResetBridge::new(page.clone())));

    let state = Arc::new(AppState {
        chart_service,
        bus,
        page,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/charts", get(dashboard_charts))
        .route("/charts/stock-rate", get(stock_rate_chart))
        .route("/charts/availability", get(availability_chart))
        .route("/page", get(page_state))
        .route("/events/change", post(field_changed))
        .route("/events/pageshow", post(page_show))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&service_config.server.listen).await?;
    tracing::info!("starting sale-telemetry service on {}", service_config.server.listen);

    axum::serve(listener, router).await?;

    Ok(())
}
