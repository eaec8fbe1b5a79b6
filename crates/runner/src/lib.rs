//! Best-Execution Runner
//!
//! Wires a market data source to a router and reports the outcome:
//!
//! - **Service**: loads fresh snapshots per request, routes, builds the report
//! - **CLI**: argument parsing for the `bestex` console binary
//!
//! ## Flow
//!
//! ```text
//!   ┌──────────────────┐      books, balances     ┌──────────────────┐
//!   │ MarketDataSource │ ───────────────────────► │ ExecutionRouter  │
//!   └──────────────────┘                          └────────┬─────────┘
//!                                                          │ fills
//!                                                          ▼
//!                                                 ┌──────────────────┐
//!                                                 │ ExecutionReport  │
//!                                                 └──────────────────┘
//! ```

pub mod cli;
pub mod service;

// Re-export main types
pub use cli::{CliArgs, CliCommand, CliError, parse_args, usage};
pub use service::{BestExecutionService, ServiceError};
