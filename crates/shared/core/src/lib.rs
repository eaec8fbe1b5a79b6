//! Best-Execution Core Domain
//!
//! Pure domain types for the best-execution router.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    // Inputs
    ExchangeBalance,
    Order,
    OrderBook,
    Side,
    // Outputs
    ExecutionFill,
    ExecutionReport,
};
pub use values::{ExchangeId, Price, Quantity};
