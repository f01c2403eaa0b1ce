mod chart;
mod data_preview;
mod summary;

pub use chart::{chart, chart_region, static_chart};
pub use data_preview::{data_preview, data_preview_body, DataPage, PAGE_SIZE};
pub use summary::summary;
