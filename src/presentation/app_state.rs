// Application state for HTTP handlers
use crate::application::report_catalog::ReportCatalog;
use crate::application::viewer_service::ViewerService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub viewer_service: ViewerService,
    pub catalog: Arc<dyn ReportCatalog>,
}
