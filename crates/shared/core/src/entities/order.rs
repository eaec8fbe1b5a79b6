use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::values::{Price, Quantity};

/// A resting order in an exchange's order book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    pub price: Price,
    pub amount: Quantity,
}

impl Order {
    pub fn new(price: Price, amount: Quantity) -> Self {
        Self { price, amount }
    }

    /// An order can only be routed to if both price and amount are positive.
    /// A zero price would make sell-side capacity undefined.
    pub fn is_well_formed(&self) -> bool {
        self.price > Decimal::ZERO && self.amount > Decimal::ZERO
    }
}
