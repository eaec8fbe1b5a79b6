//! Best-Execution Ports
//!
//! Port definitions (traits) for the best-execution router.
//! These define the boundaries between the routing core and the
//! infrastructure that feeds it.

mod error;
mod market_data;
mod routing;

pub use error::{RoutingError, RoutingResult};
pub use market_data::MarketDataSource;
pub use routing::ExecutionRouter;
