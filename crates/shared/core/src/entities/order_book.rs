use serde::{Deserialize, Serialize};

use super::{Order, Side};
use crate::values::ExchangeId;

/// Snapshot of one exchange's order book.
///
/// `asks` are sorted by ascending price and `bids` by descending price,
/// so the first order of each sequence is the best one for its side.
/// Nothing downstream re-sorts them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBook {
    pub exchange_id: ExchangeId,
    pub asks: Vec<Order>,
    pub bids: Vec<Order>,
}

impl OrderBook {
    pub fn new(exchange_id: ExchangeId, asks: Vec<Order>, bids: Vec<Order>) -> Self {
        Self {
            exchange_id,
            asks,
            bids,
        }
    }

    /// Orders a request of the given side trades against:
    /// buyers take asks, sellers hit bids.
    pub fn orders(&self, side: Side) -> &[Order] {
        match side {
            Side::Buy => &self.asks,
            Side::Sell => &self.bids,
        }
    }
}
