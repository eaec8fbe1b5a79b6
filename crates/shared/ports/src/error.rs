use bestex_core::ExchangeId;
use thiserror::Error;

/// Invalid-argument errors raised before any routing happens.
///
/// Running out of liquidity is not an error: it shows up as a plan whose
/// total is below the requested amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("Amount must be greater than zero.")]
    NonPositiveAmount,

    #[error("Order books data empty.")]
    NoOrderBooks,

    #[error("Crypto exchange data empty.")]
    NoBalances,

    #[error("Mismatch: {order_books} order books but only {balances} balance entries.")]
    BalanceMismatch { order_books: usize, balances: usize },

    #[error("Duplicate balance entry for exchange {0}.")]
    DuplicateExchange(ExchangeId),
}

pub type RoutingResult<T> = std::result::Result<T, RoutingError>;
