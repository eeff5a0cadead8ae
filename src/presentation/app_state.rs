// Application state for HTTP handlers
use crate::application::chart_service::ChartService;
use crate::presentation::lifecycle::EventBus;
use crate::presentation::page::PageState;

pub struct AppState {
    pub chart_service: ChartService,
    pub bus: EventBus,
    pub page: PageState,
}
