//! Best-Execution Routing
//!
//! Splits a buy or sell request across several exchanges.
//!
//! ## Algorithm
//!
//! 1. **Validate** the request and the data snapshot
//! 2. **Seed a frontier** with the best order of every order book
//! 3. **Merge**: repeatedly fill against the globally best price, capped by
//!    the order's amount, the owning exchange's balance and what is still
//!    needed, then admit that book's next order
//!
//! The frontier never holds more than one order per book, so it stays as
//! small as the number of exchanges still in play.

mod allocator;
mod frontier;
mod ledger;
mod validator;

pub use allocator::{ExecutionPlan, PriceMergeRouter};

// Re-export the trait from ports for convenience
pub use bestex_ports::{ExecutionRouter, RoutingError, RoutingResult};
