// Application layer - Use cases and capability traits
pub mod page_renderer;
pub mod report_catalog;
pub mod viewer_service;
