mod dashboard;
mod fragments;

pub use dashboard::dashboard_handler;
pub use fragments::{chart_fragment_handler, data_preview_handler, PreviewQuery};
