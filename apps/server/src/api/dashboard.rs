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
use networth_core::{
    charts::{ChartData, TooltipEntry},
    dashboard::{NetWorthView, PercentageView},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct NetWorthQuery {
    date: Option<String>,
}

#[derive(Deserialize)]
struct TooltipQuery {
    dataset: String,
    index: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TooltipResponse {
    #[serde(flatten)]
    entry: TooltipEntry,
    lines: Vec<String>,
}

async fn get_net_worth(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NetWorthQuery>,
) -> ApiResult<Json<NetWorthView>> {
    let date = parse_date_param(query.date.as_deref())?;
    let view = state.dashboard_service.net_worth_view(date)?;
    Ok(Json(view))
}

async fn get_net_worth_tooltip(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TooltipQuery>,
) -> ApiResult<Json<TooltipResponse>> {
    let entry = state
        .dashboard_service
        .net_worth_tooltip(&query.dataset, query.index)?
        .ok_or(ApiError::NotFound)?;
    let lines = entry.lines();
    Ok(Json(TooltipResponse { entry, lines }))
}

async fn get_net_percentage(State(state): State<Arc<AppState>>) -> ApiResult<Json<PercentageView>> {
    Ok(Json(state.dashboard_service.percentage_view()?))
}

async fn get_prediction(State(state): State<Arc<AppState>>) -> ApiResult<Json<ChartData>> {
    Ok(Json(state.dashboard_service.prediction_view()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard/net-worth", get(get_net_worth))
        .route("/dashboard/net-worth/tooltip", get(get_net_worth_tooltip))
        .route("/dashboard/net-percentage", get(get_net_percentage))
        .route("/dashboard/prediction", get(get_prediction))
}
