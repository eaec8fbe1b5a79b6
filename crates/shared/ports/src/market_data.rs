use bestex_core::{ExchangeBalance, OrderBook};

/// Port for loading the snapshots the router works on
///
/// Implementations decide where books and balances come from (files,
/// a database, a live feed) and how many records to load.
pub trait MarketDataSource: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load every order book, best price first on each side
    fn order_books(&self) -> Result<Vec<OrderBook>, Self::Error>;

    /// Load the balance of every exchange
    fn balances(&self) -> Result<Vec<ExchangeBalance>, Self::Error>;

    /// Get the source's name for logging
    fn name(&self) -> &str {
        "MarketDataSource"
    }
}
