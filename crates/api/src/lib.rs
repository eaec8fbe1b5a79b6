//! Best-Execution HTTP API
//!
//! REST surface over `BestExecutionService`:
//!
//! - `POST /api/meta-exchange/best-execution` plans an order
//! - `GET  /api/health` liveness check
//!
//! Every request loads a fresh snapshot from the configured data source.

pub mod cli;
pub mod rest;

pub use rest::{ApiError, AppState, create_router};
