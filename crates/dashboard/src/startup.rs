use crate::{
    callbacks::{ChartUpdate, ControlId, EventKind, OutputId},
    chart_fragment_handler, controls, controls_handler, dashboard_handler, data_preview_handler,
    routes, update_handler,
    view_model::{ControlRegistry, HourDomain, StateOption},
    Dataset, DashboardContext,
};
use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use hyper::{
    header::{ACCEPT, CONTENT_TYPE},
    Method,
};
use log::info;
use std::{path::PathBuf, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

/// Static page text
#[derive(Clone, Debug)]
pub struct PageText {
    pub title: String,
    pub attribution: Option<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub static_dir: String,
    pub page: PageText,
    pub dashboard: Arc<DashboardContext>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::api::controls::controls_handler,
        routes::api::update::update_handler,
    ),
    components(
        schemas(
            ControlRegistry,
            HourDomain,
            StateOption,
            ControlId,
            EventKind,
            OutputId,
            ChartUpdate,
            controls::ControlValues,
            controls::HourRange,
            routes::api::update::UpdateRequest,
            routes::api::update::UpdateResponse,
        )
    ),
    tags(
        (name = "weather dashboard api", description = "control registry and chart updates for the weather dashboard")
    )
)]
struct ApiDoc;

/// Load both CSV files and build the shared, read-only dashboard context
pub async fn build_app_state(
    static_dir: String,
    observations: String,
    coordinates: String,
    page: PageText,
) -> Result<AppState, anyhow::Error> {
    let dataset = tokio::task::spawn_blocking(move || {
        Dataset::load(&PathBuf::from(observations), &PathBuf::from(coordinates))
    })
    .await
    .map_err(|e| anyhow!("dataset loader task failed: {}", e))?
    .map_err(|e| anyhow!("error loading weather data: {}", e))?;

    Ok(app_state_from_dataset(static_dir, dataset, page))
}

pub fn app_state_from_dataset(
    static_dir: String,
    dataset: Dataset,
    page: PageText,
) -> AppState {
    AppState {
        static_dir,
        page,
        dashboard: Arc::new(DashboardContext::new(dataset)),
    }
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let serve_static = ServeDir::new(&app_state.static_dir);
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        // UI routes
        .route("/", get(dashboard_handler))
        // HTMX fragment routes
        .route("/fragments/data-preview", get(data_preview_handler))
        .route("/fragments/charts/{output}", get(chart_fragment_handler))
        // API routes
        .route("/api/controls", get(controls_handler))
        .route("/api/update", post(update_handler))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .nest_service("/static", serve_static)
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default()
        .to_string();
    info!(target: "http_request", "new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
