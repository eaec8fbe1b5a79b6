use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Best-execution request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestExecutionRequest {
    /// "Buy" or "Sell", case-insensitive
    pub order_type: String,
    /// JSON number or decimal string, e.g. `2.5` or `"2.5"`
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Problem body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub title: String,
    pub detail: String,
}
