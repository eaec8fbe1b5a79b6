use std::collections::HashSet;

use bestex_core::{ExchangeBalance, OrderBook, Quantity};
use bestex_ports::{RoutingError, RoutingResult};
use rust_decimal::Decimal;

/// Check a request before any routing work is done.
///
/// There may be more balances than order books (some exchanges can have
/// nothing quoted) but never the other way round.
pub(crate) fn validate(
    amount: Quantity,
    order_books: &[OrderBook],
    balances: &[ExchangeBalance],
) -> RoutingResult<()> {
    if amount <= Decimal::ZERO {
        return Err(RoutingError::NonPositiveAmount);
    }
    if order_books.is_empty() {
        return Err(RoutingError::NoOrderBooks);
    }
    if balances.is_empty() {
        return Err(RoutingError::NoBalances);
    }
    if order_books.len() > balances.len() {
        return Err(RoutingError::BalanceMismatch {
            order_books: order_books.len(),
            balances: balances.len(),
        });
    }

    let mut seen = HashSet::with_capacity(balances.len());
    for balance in balances {
        if !seen.insert(balance.id) {
            return Err(RoutingError::DuplicateExchange(balance.id));
        }
    }

    Ok(())
}
