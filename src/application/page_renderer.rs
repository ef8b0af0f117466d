// Renderer capability for turning the viewer model into a page
use crate::domain::panel::TabGroup;

/// Renders a tab group into a complete page for the hosting environment.
///
/// Rendering must be a pure function of the group: the same input always
/// produces the same bytes.
pub trait PageRenderer: Send + Sync {
    fn render_page(&self, group: &TabGroup) -> String;
}
