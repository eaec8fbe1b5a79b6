use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use bestex_core::{ExecutionReport, Side};
use bestex_ports::MarketDataSource;
use bestex_runner::ServiceError;
use log::warn;

use crate::rest::{ApiError, dto::*};

use super::AppState;

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// POST /api/meta-exchange/best-execution
pub async fn best_execution<S>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<BestExecutionRequest>, JsonRejection>,
) -> Result<Json<ExecutionReport>, ApiError>
where
    S: MarketDataSource + 'static,
    ApiError: From<ServiceError<S::Error>>,
{
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let side = Side::try_from(request.order_type.as_str())
        .map_err(|reason| ApiError::invalid_parameter("orderType", reason))?;

    state.service.execute(side, request.amount).map(Json).map_err(|e| {
        let err = ApiError::from(e);
        warn!("Best execution request failed: {}", err);
        err
    })
}
