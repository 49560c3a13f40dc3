// Presentation layer - HTTP surface and text rendering
pub mod app_state;
pub mod chart_renderer;
pub mod handlers;
pub mod router;
