// Viewer service - Use case for building and rendering the tabbed report page
use crate::application::page_renderer::PageRenderer;
use crate::domain::panel::{Panel, TabGroup};
use crate::infrastructure::config::ViewerConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct ViewerService {
    config: ViewerConfig,
    renderer: Arc<dyn PageRenderer>,
}

impl ViewerService {
    pub fn new(config: ViewerConfig, renderer: Arc<dyn PageRenderer>) -> Self {
        Self { config, renderer }
    }

    /// Build the tab group from configuration. Rebuilds from scratch on
    /// every call, so repeated invocations yield equal groups.
    pub fn tab_group(&self) -> TabGroup {
        let panels: Vec<Panel> = self
            .config
            .panels
            .iter()
            .map(|p| Panel::new(p.title.clone(), p.source.clone(), p.width, p.height))
            .collect();

        tracing::debug!("Built tab group with {} panels", panels.len());

        TabGroup::new(panels)
    }

    /// Render the viewer page through the injected renderer
    pub fn render(&self) -> String {
        self.renderer.render_page(&self.tab_group())
    }
}
