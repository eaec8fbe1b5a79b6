use serde::{Deserialize, Serialize};

use super::Side;
use crate::values::{ExchangeId, Price, Quantity};

/// One leg of an execution plan: trade `amount` at `price` on `exchange_id`.
///
/// Fills are produced best price first; callers must keep that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionFill {
    pub order_type: Side,
    pub amount: Quantity,
    pub price: Price,
    pub exchange_id: ExchangeId,
}

impl ExecutionFill {
    pub fn new(order_type: Side, amount: Quantity, price: Price, exchange_id: ExchangeId) -> Self {
        Self {
            order_type,
            amount,
            price,
            exchange_id,
        }
    }
}

/// Response envelope around an execution plan.
///
/// A plan that could not be fully filled is still a successful plan;
/// `is_complete` tells the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionReport {
    pub execution_orders: Vec<ExecutionFill>,
    /// Number of fills
    pub total: usize,
    pub total_amount: Quantity,
    pub requested_amount: Quantity,
    pub is_complete: bool,
}

impl ExecutionReport {
    pub fn new(requested_amount: Quantity, execution_orders: Vec<ExecutionFill>) -> Self {
        let total_amount: Quantity = execution_orders.iter().map(|f| f.amount).sum();
        Self {
            total: execution_orders.len(),
            is_complete: total_amount >= requested_amount,
            execution_orders,
            total_amount,
            requested_amount,
        }
    }
}
