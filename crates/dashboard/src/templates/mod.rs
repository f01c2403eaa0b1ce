pub mod components;
pub mod fragments;
pub mod layouts;
pub mod pages;

pub use fragments::{chart, data_preview_body, DataPage};
pub use layouts::PageConfig;
pub use pages::{dashboard_page, DashboardData};
