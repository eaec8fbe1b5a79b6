//! Best-execution service
//!
//! Loads a fresh snapshot from the data source on every request, so each
//! routing call owns its balances and requests never interfere.

use bestex_core::{ExecutionReport, Quantity, Side};
use bestex_ports::{ExecutionRouter, MarketDataSource, RoutingError};
use bestex_routing::PriceMergeRouter;
use log::info;
use thiserror::Error;

/// Errors from a best-execution request.
///
/// `InvalidRequest` is the caller's fault; `MarketData` means the snapshots
/// could not be loaded. A plan that falls short of the requested amount is
/// not an error.
#[derive(Error, Debug)]
pub enum ServiceError<E: std::error::Error + 'static> {
    #[error("{0}")]
    InvalidRequest(#[from] RoutingError),

    #[error("Market data unavailable: {0}")]
    MarketData(#[source] E),
}

pub struct BestExecutionService<S, R = PriceMergeRouter> {
    source: S,
    router: R,
}

impl<S: MarketDataSource> BestExecutionService<S> {
    /// Service using the default price-merge router
    pub fn with_source(source: S) -> Self {
        Self::new(source, PriceMergeRouter::new())
    }
}

impl<S: MarketDataSource, R: ExecutionRouter> BestExecutionService<S, R> {
    pub fn new(source: S, router: R) -> Self {
        Self { source, router }
    }

    /// Plan the execution of `amount` coins on `side`
    pub fn execute(
        &self,
        side: Side,
        amount: Quantity,
    ) -> Result<ExecutionReport, ServiceError<S::Error>> {
        info!("Received best execution request: {} {}", side, amount);

        let order_books = self
            .source
            .order_books()
            .map_err(ServiceError::MarketData)?;
        let balances = self.source.balances().map_err(ServiceError::MarketData)?;

        let fills = self
            .router
            .best_execution(side, amount, &order_books, &balances)?;
        let report = ExecutionReport::new(amount, fills);

        info!(
            "Best execution completed: {} {} - executed {} across {} orders, complete: {}",
            side, amount, report.total_amount, report.total, report.is_complete
        );

        Ok(report)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn router(&self) -> &R {
        &self.router
    }
}
