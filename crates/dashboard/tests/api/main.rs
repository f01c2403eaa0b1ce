mod api;
mod charts;
mod dashboard;
mod helpers;
