use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::{
    callbacks::render_all,
    templates::{dashboard_page, DashboardData, DataPage},
    AppState,
};

/// Handler for the dashboard page (GET /)
pub async fn dashboard_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    let ctx = &state.dashboard;
    let values = ctx.initial_values();
    let data = DashboardData {
        title: &state.page.title,
        attribution: state.page.attribution.as_deref(),
        registry: ctx.registry(),
        values: &values,
        preview: DataPage::of(ctx.dataset(), 1),
        charts: render_all(ctx, &values),
        pressure: ctx.pressure(),
    };

    Html(dashboard_page(&data).into_string())
}
