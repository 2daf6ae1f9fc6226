//! Unit tests for the investments service.

use super::*;
use crate::errors::{Error, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockProvider {
    responses: Mutex<VecDeque<Result<Vec<ActualPoint>>>>,
}

impl MockProvider {
    fn new(responses: Vec<Result<Vec<ActualPoint>>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait]
impl InvestmentHistoryProviderTrait for MockProvider {
    async fn fetch_total_investments(&self) -> Result<Vec<ActualPoint>> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Fetch("no more responses".to_string())))
    }
}

fn point(id: &str, date: &str, total_value: f64) -> ActualPoint {
    ActualPoint {
        date: date.to_string(),
        total_returns: total_value * 0.1,
        total_value,
        total_return_percentage: 10.0,
        id: id.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_initial_snapshot_is_loading_and_empty() {
    let service = InvestmentsService::new(Arc::new(MockProvider::new(vec![])));
    let snapshot = service.snapshot();
    assert_eq!(snapshot.status, FetchStatus::Loading);
    assert!(!snapshot.status.is_finished());
    assert!(snapshot.total_investments.is_empty());
}

#[tokio::test]
async fn test_successful_refresh_stores_series() {
    let provider = MockProvider::new(vec![Ok(vec![
        point("a", "2024-07-01", 1.1),
        point("b", "2024-08-01", 1.2),
    ])]);
    let service = InvestmentsService::new(Arc::new(provider));

    assert_eq!(service.refresh().await, FetchStatus::Loaded);

    let snapshot = service.snapshot();
    assert_eq!(snapshot.status, FetchStatus::Loaded);
    assert_eq!(snapshot.total_investments.len(), 2);
    assert_eq!(snapshot.total_investments[1].id, "b");
}

#[tokio::test]
async fn test_refresh_replaces_series_wholesale() {
    let provider = MockProvider::new(vec![
        Ok(vec![point("a", "2024-07-01", 1.1), point("b", "2024-08-01", 1.2)]),
        Ok(vec![point("c", "2024-09-01", 1.3)]),
    ]);
    let service = InvestmentsService::new(Arc::new(provider));

    service.refresh().await;
    service.refresh().await;

    let snapshot = service.snapshot();
    assert_eq!(snapshot.total_investments, vec![point("c", "2024-09-01", 1.3)]);
}

#[tokio::test]
async fn test_failed_refresh_clears_series() {
    let provider = MockProvider::new(vec![
        Ok(vec![point("a", "2024-07-01", 1.1)]),
        Err(Error::Fetch("HTTP 500".to_string())),
    ]);
    let service = InvestmentsService::new(Arc::new(provider));

    assert_eq!(service.refresh().await, FetchStatus::Loaded);
    assert_eq!(service.refresh().await, FetchStatus::Failed);

    let snapshot = service.snapshot();
    assert_eq!(snapshot.status, FetchStatus::Failed);
    assert!(snapshot.status.is_finished());
    assert!(snapshot.total_investments.is_empty());
}

#[test]
fn test_actual_point_calendar_date() {
    let p = point("a", "2024-07-15T00:00:00.000Z", 1.0);
    assert_eq!(
        p.calendar_date().unwrap(),
        NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
    );
    assert!(point("b", "yesterday", 1.0).calendar_date().is_err());
}

#[test]
fn test_snapshot_serializes_camel_case() {
    let snapshot = InvestmentsSnapshot {
        status: FetchStatus::Loaded,
        total_investments: vec![point("a", "2024-07-01", 1.5)],
    };
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["status"], "loaded");
    assert_eq!(json["totalInvestments"][0]["totalValue"], 1.5);
    assert_eq!(json["totalInvestments"][0]["totalReturnPercentage"], 10.0);
}
