//! Market data source adapters
//!
//! Each adapter implements `MarketDataSource` for one storage backend.

pub mod file;
pub mod memory;
