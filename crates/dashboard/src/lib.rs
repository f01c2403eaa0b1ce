pub mod callbacks;
pub mod charts;
pub mod context;
pub mod controls;
pub mod dataset;
pub mod routes;
pub mod startup;
pub mod templates;
pub mod utils;
pub mod view_model;

pub use context::DashboardContext;
pub use dataset::{Dataset, WeatherRow};
pub use routes::*;
pub use startup::*;
pub use utils::*;
