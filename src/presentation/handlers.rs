// HTTP request handlers
use crate::domain::dataset::DatasetKind;
use crate::infrastructure::http_response::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Serve one dataset, e.g. `GET /api/customer-type`
pub async fn get_dataset(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let kind: DatasetKind = slug.parse()?;
    let dataset = state.dataset_service.get_dataset(kind).await?;
    Ok(Json(dataset))
}
