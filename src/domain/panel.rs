// Panel and tab group domain models

/// A single visual region displaying one embedded document.
///
/// `source` is handed to the embedding mechanism verbatim; it is never
/// rewritten, resolved, or URL-encoded here.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub source: String,
    pub width: u32,
    pub height: u32,
}

impl Panel {
    pub fn new(title: String, source: String, width: u32, height: u32) -> Self {
        Self {
            title,
            source,
            width,
            height,
        }
    }
}

/// Ordered group of panels, one visible at a time.
///
/// Construction touches no filesystem state; a panel whose source does not
/// exist still gets its tab.
#[derive(Debug, Clone, PartialEq)]
pub struct TabGroup {
    pub panels: Vec<Panel>,
}

impl TabGroup {
    pub fn new(panels: Vec<Panel>) -> Self {
        Self { panels }
    }
}
