//! File-backed market data source
//!
//! Reads line-oriented snapshot files:
//! - order books: an optional prefix (e.g. a timestamp column) followed by a
//!   JSON object; the n-th book read belongs to exchange n
//! - balances: one JSON object per line
//!
//! Blank lines are skipped. Reading stops after `max_records` records.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bestex_core::{ExchangeBalance, ExchangeId, OrderBook};
use bestex_ports::MarketDataSource;
use log::{debug, info};

use crate::config::ExchangeDataSettings;
use crate::error::{GatewayError, GatewayResult};
use crate::messages::market_data::{BalanceRecord, OrderBookRecord};

/// `MarketDataSource` reading snapshot files from disk on every call
#[derive(Debug, Clone)]
pub struct FileMarketDataSource {
    settings: ExchangeDataSettings,
}

impl FileMarketDataSource {
    pub fn new(settings: ExchangeDataSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ExchangeDataSettings {
        &self.settings
    }
}

impl MarketDataSource for FileMarketDataSource {
    type Error = GatewayError;

    fn order_books(&self) -> GatewayResult<Vec<OrderBook>> {
        let path = &self.settings.order_books_path;
        let books = parse_order_books(
            open(path)?,
            &path.display().to_string(),
            self.settings.max_records,
        )?;
        info!("Loaded {} order books from {}", books.len(), path.display());
        Ok(books)
    }

    fn balances(&self) -> GatewayResult<Vec<ExchangeBalance>> {
        let path = &self.settings.balances_path;
        let balances = parse_balances(
            open(path)?,
            &path.display().to_string(),
            self.settings.max_records,
        )?;
        info!(
            "Loaded {} exchange balances from {}",
            balances.len(),
            path.display()
        );
        Ok(balances)
    }

    fn name(&self) -> &str {
        "File"
    }
}

fn open(path: &Path) -> GatewayResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|error| GatewayError::Io {
            path: path.display().to_string(),
            error,
        })
}

/// Parse up to `max_records` order books.
///
/// Everything before the first `{` of a line is ignored; lines without one
/// are skipped. `source` is only used in error messages.
pub fn parse_order_books<R: BufRead>(
    reader: R,
    source: &str,
    max_records: usize,
) -> GatewayResult<Vec<OrderBook>> {
    let mut books = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        if books.len() >= max_records {
            break;
        }
        let line = line.map_err(|error| GatewayError::Io {
            path: source.to_string(),
            error,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(json_start) = line.find('{') else {
            debug!("{} line {}: no JSON object, skipping", source, index + 1);
            continue;
        };

        let record: OrderBookRecord =
            serde_json::from_str(&line[json_start..]).map_err(|error| GatewayError::Parse {
                path: source.to_string(),
                line: index + 1,
                error,
            })?;

        let exchange_id =
            next_exchange_id(books.len()).ok_or_else(|| GatewayError::ExchangeIdOverflow {
                path: source.to_string(),
                line: index + 1,
            })?;
        books.push(record.into_order_book(exchange_id));
    }

    Ok(books)
}

/// Id of the book read after `loaded` others: ids start at 1
fn next_exchange_id(loaded: usize) -> Option<ExchangeId> {
    ExchangeId::try_from(loaded.checked_add(1)?).ok()
}

/// Parse up to `max_records` exchange balances, one JSON object per line
pub fn parse_balances<R: BufRead>(
    reader: R,
    source: &str,
    max_records: usize,
) -> GatewayResult<Vec<ExchangeBalance>> {
    let mut balances = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        if balances.len() >= max_records {
            break;
        }
        let line = line.map_err(|error| GatewayError::Io {
            path: source.to_string(),
            error,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let record: BalanceRecord =
            serde_json::from_str(&line).map_err(|error| GatewayError::Parse {
                path: source.to_string(),
                line: index + 1,
                error,
            })?;
        balances.push(record.into());
    }

    Ok(balances)
}
