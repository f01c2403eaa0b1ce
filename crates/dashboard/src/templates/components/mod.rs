mod controls;
mod tabs;

pub use controls::{hour_range_slider, hour_slider, state_dropdown};
pub use tabs::{tab_panel, tabs, Tab};
