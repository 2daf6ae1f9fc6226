//! Error types for the backend client.

use thiserror::Error;

/// Errors that can occur while fetching the investment history.
///
/// None of them is retried: the caller reports the fetch as failed and the
/// dashboard renders without actual data.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The request did not complete in time.
    #[error("Timeout fetching {url}")]
    Timeout { url: String },

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The body does not match the expected schema.
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// A network error occurred while communicating with the backend.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl BackendError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

impl From<BackendError> for networth_core::Error {
    fn from(err: BackendError) -> Self {
        networth_core::Error::Fetch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = BackendError::Status {
            status: 401,
            url: "http://localhost:4001/api/v1/getTotalInvestments".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "HTTP 401 from http://localhost:4001/api/v1/getTotalInvestments"
        );

        let error = BackendError::invalid("missing field `id`");
        assert_eq!(error.to_string(), "Invalid response: missing field `id`");
    }

    #[test]
    fn test_converts_to_core_fetch_error() {
        let core: networth_core::Error = BackendError::invalid("bad").into();
        assert!(matches!(core, networth_core::Error::Fetch(ref m) if m == "Invalid response: bad"));
    }
}
