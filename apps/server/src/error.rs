use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use networth_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Not Found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => match e {
                CoreError::Format(_) | CoreError::Validation(_) => {
                    (StatusCode::BAD_REQUEST, e.to_string())
                }
                CoreError::Division(_) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
                CoreError::Fetch(_) => (StatusCode::BAD_GATEWAY, e.to_string()),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            },
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::Internal(reason) => (StatusCode::INTERNAL_SERVER_ERROR, reason.clone()),
            ApiError::Anyhow(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };
        if status.is_server_error() {
            tracing::error!("{}", msg);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<networth_core::errors::FormatError> for ApiError {
    fn from(err: networth_core::errors::FormatError) -> Self {
        ApiError::Core(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use networth_core::comparison::Direction;
    use networth_core::errors::{DivisionError, FormatError, ProjectionError};

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_core_error_status_mapping() {
        assert_eq!(
            status_of(FormatError::MissingUnit("2.5".into()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::Core(CoreError::Division(DivisionError {
                direction: Direction::ActualBehind,
                denominator: "predicted",
            }))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(ApiError::Core(CoreError::Fetch("HTTP 500".into()))),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(ApiError::Core(ProjectionError::InvalidStep.into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(status_of(ApiError::NotFound), StatusCode::NOT_FOUND);
    }
}
