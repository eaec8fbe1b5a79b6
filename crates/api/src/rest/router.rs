use axum::{
    Router,
    routing::{get, post},
};
use bestex_ports::MarketDataSource;
use bestex_runner::{BestExecutionService, ServiceError};
use std::sync::Arc;

use super::{ApiError, handlers};

/// Application state shared across handlers
pub struct AppState<S> {
    pub service: BestExecutionService<S>,
}

impl<S: MarketDataSource> AppState<S> {
    pub fn new(source: S) -> Self {
        AppState {
            service: BestExecutionService::with_source(source),
        }
    }
}

/// Create the REST API router
pub fn create_router<S>(state: Arc<AppState<S>>) -> Router
where
    S: MarketDataSource + 'static,
    ApiError: From<ServiceError<S::Error>>,
{
    Router::new()
        .route("/api/health", get(handlers::health))
        .route(
            "/api/meta-exchange/best-execution",
            post(handlers::best_execution::<S>),
        )
        .with_state(state)
}
