// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod fs_catalog;
pub mod html_renderer;
