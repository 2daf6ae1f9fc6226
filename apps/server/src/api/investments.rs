use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use networth_core::investments::InvestmentsSnapshot;

async fn get_investments(State(state): State<Arc<AppState>>) -> ApiResult<Json<InvestmentsSnapshot>> {
    Ok(Json(state.investments_service.snapshot()))
}

/// Fetch once more from the backend; a failure is reported in the snapshot
/// status, not as an error response.
async fn refresh_investments(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<InvestmentsSnapshot>> {
    state.investments_service.refresh().await;
    Ok(Json(state.investments_service.snapshot()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/investments", get(get_investments))
        .route("/investments/refresh", post(refresh_investments))
}
