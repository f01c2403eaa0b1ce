use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{view_model::ControlRegistry, AppState};

#[utoipa::path(
    get,
    path = "/api/controls",
    responses(
        (status = OK, description = "Hour domain, hour marks and state options of the loaded table", content_type = "application/json", body = ControlRegistry),
    ))]
pub async fn controls_handler(State(state): State<Arc<AppState>>) -> Json<ControlRegistry> {
    Json(state.dashboard.registry().clone())
}
