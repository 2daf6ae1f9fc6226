use async_trait::async_trait;
use log::{debug, warn};
use std::sync::{Arc, RwLock};

use super::investments_model::{FetchStatus, InvestmentsSnapshot};
use super::investments_traits::{InvestmentHistoryProviderTrait, InvestmentsServiceTrait};

/// Service holding the latest actual investment history.
pub struct InvestmentsService {
    provider: Arc<dyn InvestmentHistoryProviderTrait>,
    state: RwLock<InvestmentsSnapshot>,
}

impl InvestmentsService {
    pub fn new(provider: Arc<dyn InvestmentHistoryProviderTrait>) -> Self {
        Self {
            provider,
            state: RwLock::new(InvestmentsSnapshot::default()),
        }
    }

    fn replace(&self, snapshot: InvestmentsSnapshot) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *state = snapshot;
    }
}

#[async_trait]
impl InvestmentsServiceTrait for InvestmentsService {
    async fn refresh(&self) -> FetchStatus {
        match self.provider.fetch_total_investments().await {
            Ok(points) => {
                debug!("Fetched {} investment points", points.len());
                self.replace(InvestmentsSnapshot {
                    status: FetchStatus::Loaded,
                    total_investments: points,
                });
                FetchStatus::Loaded
            }
            Err(e) => {
                warn!("Error fetching total investments: {}", e);
                self.replace(InvestmentsSnapshot {
                    status: FetchStatus::Failed,
                    total_investments: Vec::new(),
                });
                FetchStatus::Failed
            }
        }
    }

    fn snapshot(&self) -> InvestmentsSnapshot {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
