pub mod controls;
pub mod update;

pub use controls::controls_handler;
pub use update::{update_handler, UpdateRequest, UpdateResponse};
