//! Wire record types
//!
//! Mirrors the JSON layout of the stored snapshots.

pub mod market_data;
