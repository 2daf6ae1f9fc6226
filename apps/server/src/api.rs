use std::sync::Arc;

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{routing::get, Router};
use chrono::NaiveDate;
use networth_core::utils::time_utils::dashboard_date_today;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod dashboard;
mod investments;
mod projection;
mod units;

pub async fn healthz() -> &'static str {
    "ok"
}

/// Read an optional `YYYY-MM-DD` query parameter, defaulting to today in the
/// dashboard timezone.
pub(crate) fn parse_date_param(raw: Option<&str>) -> ApiResult<NaiveDate> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
            ApiError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", value))
        }),
        None => Ok(dashboard_date_today()),
    }
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/healthz", get(healthz))
        .merge(projection::router())
        .merge(investments::router())
        .merge(dashboard::router())
        .merge(units::router());

    Router::new()
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_param() {
        assert_eq!(
            parse_date_param(Some("2024-08-01")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 8, 1).unwrap()
        );
        assert_eq!(parse_date_param(None).unwrap(), dashboard_date_today());
        assert_eq!(parse_date_param(Some("  ")).unwrap(), dashboard_date_today());
        assert!(matches!(
            parse_date_param(Some("01/08/2024")),
            Err(ApiError::BadRequest(_))
        ));
    }
}
