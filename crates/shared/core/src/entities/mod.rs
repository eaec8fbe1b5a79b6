mod balance;
mod fill;
mod order;
mod order_book;
mod side;

pub use balance::ExchangeBalance;
pub use fill::{ExecutionFill, ExecutionReport};
pub use order::Order;
pub use order_book::OrderBook;
pub use side::Side;
