use std::sync::Arc;

use crate::config::Config;
use networth_backend::InvestmentsClient;
use networth_core::{
    dashboard::{DashboardService, DashboardServiceTrait},
    investments::{InvestmentHistoryProviderTrait, InvestmentsService, InvestmentsServiceTrait},
    projection::{ProjectionConfig, ProjectionService, ProjectionServiceTrait},
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub projection_service: Arc<dyn ProjectionServiceTrait>,
    pub investments_service: Arc<dyn InvestmentsServiceTrait>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("NW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    tracing::info!(
        "Mode {:?}, investments backend at {}",
        config.mode,
        config.backend_url
    );
    let client = InvestmentsClient::new(config.backend_url.clone(), config.session_cookie.clone());
    build_state_with_provider(config.projection.clone(), Arc::new(client))
}

/// Wire the services around an arbitrary history provider.
///
/// The projection is computed here, before the router exists. The actual
/// series starts empty in the loading state; callers trigger the first fetch.
pub fn build_state_with_provider(
    projection: ProjectionConfig,
    provider: Arc<dyn InvestmentHistoryProviderTrait>,
) -> anyhow::Result<Arc<AppState>> {
    let projection_service: Arc<dyn ProjectionServiceTrait> =
        Arc::new(ProjectionService::new(projection)?);
    let investments_service: Arc<dyn InvestmentsServiceTrait> =
        Arc::new(InvestmentsService::new(provider));
    let dashboard_service: Arc<dyn DashboardServiceTrait> = Arc::new(DashboardService::new(
        projection_service.clone(),
        investments_service.clone(),
    ));

    Ok(Arc::new(AppState {
        projection_service,
        investments_service,
        dashboard_service,
    }))
}

/// Fetch the investment history in the background.
pub fn spawn_initial_refresh(state: Arc<AppState>) {
    tokio::spawn(async move {
        let status = state.investments_service.refresh().await;
        tracing::info!("Initial investments fetch finished: {:?}", status);
    });
}
