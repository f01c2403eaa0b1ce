use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    callbacks::{dispatch, ChartUpdate, ControlId, EventKind},
    controls::ControlValues,
    AppState,
};

/// A control event together with the value of every control
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRequest {
    pub control: ControlId,
    #[serde(default)]
    pub event: EventKind,
    pub values: ControlValues,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UpdateResponse {
    pub updates: Vec<ChartUpdate>,
}

#[utoipa::path(
    post,
    path = "/api/update",
    request_body = UpdateRequest,
    responses(
        (status = OK, description = "Recomputed figures for every chart bound to the control", content_type = "application/json", body = UpdateResponse),
        (status = BAD_REQUEST, description = "Malformed control event"),
        (status = UNPROCESSABLE_ENTITY, description = "Unknown control or invalid control values")
    ))]
pub async fn update_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpdateRequest>,
) -> Json<UpdateResponse> {
    let updates = dispatch(
        &state.dashboard,
        request.control,
        request.event,
        &request.values,
    );
    Json(UpdateResponse { updates })
}
