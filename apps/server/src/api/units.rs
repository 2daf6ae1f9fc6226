use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::Query, routing::get, Json, Router};
use networth_core::units::convert;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct ConvertQuery {
    value: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConvertResponse {
    input: String,
    crores: f64,
}

async fn convert_units(Query(query): Query<ConvertQuery>) -> ApiResult<Json<ConvertResponse>> {
    let crores = convert(&query.value)?;
    Ok(Json(ConvertResponse {
        input: query.value,
        crores,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/units/convert", get(convert_units))
}
