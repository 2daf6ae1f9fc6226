use std::sync::Arc;

use crate::{
    api::parse_date_param,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use networth_core::projection::{InvestmentPoint, ProjectionConfig};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectionResponse {
    config: ProjectionConfig,
    series: Vec<InvestmentPoint>,
}

#[derive(Deserialize)]
struct AnchorQuery {
    date: Option<String>,
}

async fn get_projection(State(state): State<Arc<AppState>>) -> ApiResult<Json<ProjectionResponse>> {
    let projection = &state.projection_service;
    Ok(Json(ProjectionResponse {
        config: projection.config().clone(),
        series: projection.series().to_vec(),
    }))
}

async fn get_anchor(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AnchorQuery>,
) -> ApiResult<Json<InvestmentPoint>> {
    let date = parse_date_param(query.date.as_deref())?;
    state
        .projection_service
        .anchor(date)
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/projection", get(get_projection))
        .route("/projection/anchor", get(get_anchor))
}
