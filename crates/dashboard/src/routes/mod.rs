pub mod api;
pub mod ui;

pub use api::{controls_handler, update_handler, UpdateRequest, UpdateResponse};
pub use ui::{chart_fragment_handler, dashboard_handler, data_preview_handler, PreviewQuery};
