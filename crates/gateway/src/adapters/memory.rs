//! In-memory market data source
//!
//! Serves fixed snapshots. Used by tests and by callers that already hold
//! parsed books and balances.

use std::convert::Infallible;

use bestex_core::{ExchangeBalance, OrderBook};
use bestex_ports::MarketDataSource;

#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketDataSource {
    order_books: Vec<OrderBook>,
    balances: Vec<ExchangeBalance>,
}

impl InMemoryMarketDataSource {
    pub fn new(order_books: Vec<OrderBook>, balances: Vec<ExchangeBalance>) -> Self {
        Self {
            order_books,
            balances,
        }
    }
}

impl MarketDataSource for InMemoryMarketDataSource {
    type Error = Infallible;

    // Each call hands out a fresh copy, so no two requests share balances
    fn order_books(&self) -> Result<Vec<OrderBook>, Infallible> {
        Ok(self.order_books.clone())
    }

    fn balances(&self) -> Result<Vec<ExchangeBalance>, Infallible> {
        Ok(self.balances.clone())
    }

    fn name(&self) -> &str {
        "InMemory"
    }
}
