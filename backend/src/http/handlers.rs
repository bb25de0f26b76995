//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! and chart layers. Page computations run on the blocking pool.

use axum::{
    extract::{Query, State},
    http::Uri,
    Json,
};
use tracing::debug;

use super::dto::{DatasetInfoResponse, HealthResponse, PageQuery, PageResponse};
use super::error::AppError;
use super::state::AppState;
use crate::charts;
use crate::routes::home::HomeData;
use crate::routes::locations::LocationsData;
use crate::routes::options::WidgetOptions;
use crate::routes::products::ProductsData;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

async fn run_blocking<T, F>(task: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        dataset_rows: state.dataset.len(),
    }))
}

// =============================================================================
// Dataset metadata
// =============================================================================

/// GET /v1/dataset
pub async fn get_dataset_info(State(state): State<AppState>) -> HandlerResult<DatasetInfoResponse> {
    let source = state.dataset.source();
    Ok(Json(DatasetInfoResponse {
        path: source.map(|s| s.path.clone()),
        rows: state.dataset.len(),
        columns: state.dataset.columns().to_vec(),
        checksum: source.map(|s| s.checksum.clone()),
    }))
}

/// GET /v1/options
pub async fn get_options(State(state): State<AppState>) -> HandlerResult<WidgetOptions> {
    Ok(Json(state.options.as_ref().clone()))
}

// =============================================================================
// Pages
// =============================================================================

/// GET /v1/pages/home?categories=&sizes=&location=
pub async fn get_home_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> HandlerResult<PageResponse<HomeData>> {
    let criteria = query.location_criteria(&state.options)?;
    debug!(?criteria, "Home page request");

    let response = run_blocking(move || {
        let data = services::get_home_data(&state.dataset, &criteria);
        PageResponse {
            charts: charts::home_charts(&data),
            empty: data.matched_rows == 0,
            data,
        }
    })
    .await?;

    Ok(Json(response))
}

/// GET /v1/pages/products?categories=&sizes=&location=
pub async fn get_products_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> HandlerResult<PageResponse<ProductsData>> {
    let criteria = query.location_criteria(&state.options)?;
    debug!(?criteria, "Products page request");

    let response = run_blocking(move || {
        let data = services::get_products_data(&state.dataset, &criteria);
        PageResponse {
            charts: charts::products_charts(&data),
            empty: data.matched_rows == 0,
            data,
        }
    })
    .await?;

    Ok(Json(response))
}

/// GET /v1/pages/locations?categories=&sizes=&seasons=
pub async fn get_locations_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> HandlerResult<PageResponse<LocationsData>> {
    let criteria = query.season_criteria(&state.options)?;
    debug!(?criteria, "Locations page request");

    let response = run_blocking(move || {
        let data = services::get_locations_data(&state.dataset, &state.geo, &criteria);
        PageResponse {
            charts: charts::locations_charts(&data),
            empty: data.matched_rows == 0,
            data,
        }
    })
    .await?;

    Ok(Json(response))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
