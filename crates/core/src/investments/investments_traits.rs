use async_trait::async_trait;

use super::investments_model::{ActualPoint, FetchStatus, InvestmentsSnapshot};
use crate::errors::Result;

/// Source of the actual investment history.
///
/// Implemented by the HTTP backend client. Errors should be reported as
/// [`crate::Error::Fetch`].
#[async_trait]
pub trait InvestmentHistoryProviderTrait: Send + Sync {
    async fn fetch_total_investments(&self) -> Result<Vec<ActualPoint>>;
}

/// Owner of the actual series.
#[async_trait]
pub trait InvestmentsServiceTrait: Send + Sync {
    /// Fetches the history once and replaces the current series.
    ///
    /// Never fails: a fetch error is logged, the series is cleared and the
    /// returned status is [`FetchStatus::Failed`].
    async fn refresh(&self) -> FetchStatus;

    /// A copy of the current series and fetch status.
    fn snapshot(&self) -> InvestmentsSnapshot;
}
