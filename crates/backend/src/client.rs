//! Client for the investments history endpoint.

use std::time::Duration;

use async_trait::async_trait;
use networth_core::investments::{ActualPoint, InvestmentHistoryProviderTrait};
use reqwest::header::{ACCEPT, CONTENT_TYPE, COOKIE};
use reqwest::Client;
use tracing::{debug, warn};

use crate::errors::BackendError;
use crate::models::parse_total_investments;

/// Path of the investment history endpoint, relative to the backend base URL.
pub const INVESTMENTS_ENDPOINT: &str = "/api/v1/getTotalInvestments";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Credentialed client for the investments backend.
///
/// Cookies set by the backend are kept in the client's cookie store. A session
/// cookie obtained elsewhere (e.g. by the login flow) can be supplied up front.
/// Requests are sent once; failures are not retried.
pub struct InvestmentsClient {
    client: Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl InvestmentsClient {
    /// Create a client for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>, session_cookie: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .cookie_store(true)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session_cookie,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the investment history endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, INVESTMENTS_ENDPOINT)
    }

    /// Fetch and validate the investment history.
    pub async fn fetch_history(&self) -> Result<Vec<ActualPoint>, BackendError> {
        let url = self.endpoint();

        let mut request = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, cookie);
        }

        debug!("Fetching investment history from {}", url);

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                BackendError::Timeout { url: url.clone() }
            } else {
                BackendError::Network(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Investment history request failed: HTTP {}", status);
            return Err(BackendError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let points = parse_total_investments(&body)?;

        debug!("Received {} investment points", points.len());
        Ok(points)
    }
}

#[async_trait]
impl InvestmentHistoryProviderTrait for InvestmentsClient {
    async fn fetch_total_investments(&self) -> networth_core::Result<Vec<ActualPoint>> {
        Ok(self.fetch_history().await?)
    }
}
