use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use log::debug;
use serde::Deserialize;

use crate::{
    callbacks::{self, OutputId},
    controls::ControlQuery,
    templates::{chart, data_preview_body, DataPage},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub page: Option<usize>,
}

/// Handler for the raw data table (GET /fragments/data-preview)
pub async fn data_preview_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PreviewQuery>,
) -> Html<String> {
    let page = DataPage::of(state.dashboard.dataset(), query.page.unwrap_or(1));
    Html(data_preview_body(&page).into_string())
}

/// Handler for a single chart (GET /fragments/charts/{output})
///
/// Controls missing from the query keep their initial value.
pub async fn chart_fragment_handler(
    State(state): State<Arc<AppState>>,
    Path(output): Path<OutputId>,
    Query(query): Query<ControlQuery>,
) -> Html<String> {
    let ctx = &state.dashboard;
    let values = query.resolve(&ctx.initial_values());
    debug!("rendering {:?} with {:?}", output, values);

    let figure = callbacks::render(ctx, output, &values);
    Html(chart(output.dom_id(), &figure).into_string())
}
