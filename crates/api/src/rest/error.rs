use std::convert::Infallible;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bestex_gateway::GatewayError;
use bestex_runner::ServiceError;

use crate::rest::dto::ErrorResponse;

/// API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub title: String,
    pub detail: String,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            title: "Invalid Request".to_string(),
            detail: detail.into(),
        }
    }

    /// Data files are missing or unreadable
    pub fn configuration(detail: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            title: "Configuration Error".to_string(),
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            title: "Operation Error".to_string(),
            detail: detail.into(),
        }
    }

    pub fn invalid_parameter(param: &str, reason: &str) -> Self {
        Self::bad_request(format!("Illegal parameter '{}': {}", param, reason))
    }
}

impl From<ServiceError<GatewayError>> for ApiError {
    fn from(err: ServiceError<GatewayError>) -> Self {
        match err {
            ServiceError::InvalidRequest(e) => ApiError::bad_request(e.to_string()),
            ServiceError::MarketData(e) if e.is_missing_data() => {
                ApiError::configuration(e.to_string())
            }
            ServiceError::MarketData(e) => ApiError::internal(e.to_string()),
        }
    }
}

impl From<ServiceError<Infallible>> for ApiError {
    fn from(err: ServiceError<Infallible>) -> Self {
        match err {
            ServiceError::InvalidRequest(e) => ApiError::bad_request(e.to_string()),
            ServiceError::MarketData(never) => match never {},
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            status: self.status.as_u16(),
            title: self.title,
            detail: self.detail,
        });
        (self.status, body).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.title, self.status.as_u16(), self.detail)
    }
}

impl std::error::Error for ApiError {}
