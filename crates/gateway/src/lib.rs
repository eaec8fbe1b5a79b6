//! Best-Execution Gateway
//!
//! Gateway layer between stored exchange data and the routing domain.
//! Provides:
//! - Wire records for order book and balance snapshots
//! - A file-backed `MarketDataSource` adapter
//! - Settings for where the data lives and how much of it to load
//!
//! ## Data files
//!
//! ```text
//! order_books_data            crypto_exchanges
//! ┌─────────────────────┐     ┌──────────────────┐
//! │ <ts>\t{"Bids":..}   │ ──► │ {"Id":1,...}     │
//! │ <ts>\t{"Bids":..}   │     │ {"Id":2,...}     │
//! └──────────┬──────────┘     └────────┬─────────┘
//!            │ n-th book → exchange n   │
//!            └────────────┬─────────────┘
//!                    ┌────▼────┐
//!                    │ Router  │
//!                    └─────────┘
//! ```

pub mod adapters;
pub mod config;
pub mod error;
pub mod messages;

// Re-export commonly used types
pub use adapters::file::{FileMarketDataSource, parse_balances, parse_order_books};
pub use adapters::memory::InMemoryMarketDataSource;
pub use config::ExchangeDataSettings;
pub use error::{GatewayError, GatewayResult};
pub use messages::market_data::{BalanceRecord, OrderBookRecord, OrderRecord};
