use bestex_core::{ExchangeBalance, ExecutionFill, OrderBook, Quantity, Side};

use crate::error::RoutingResult;

/// Port for best-execution routing
///
/// Splits a requested quantity across several exchanges' order books,
/// best price first, without exceeding what each exchange can afford.
///
/// Implementations must not mutate the caller's balances: every call works
/// on its own snapshot, so concurrent calls never share state.
pub trait ExecutionRouter: Send + Sync {
    /// Compute the ordered list of fills for a request.
    ///
    /// Returns fewer than `amount` units in total when liquidity runs out.
    fn best_execution(
        &self,
        side: Side,
        amount: Quantity,
        order_books: &[OrderBook],
        balances: &[ExchangeBalance],
    ) -> RoutingResult<Vec<ExecutionFill>>;

    /// Get the name of the algorithm
    fn name(&self) -> &str;
}
