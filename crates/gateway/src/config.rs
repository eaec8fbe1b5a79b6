//! Data source configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GatewayError, GatewayResult};

pub const DEFAULT_ORDER_BOOKS_PATH: &str = "./data/order_books_data";
pub const DEFAULT_BALANCES_PATH: &str = "./data/crypto_exchanges";
pub const DEFAULT_MAX_RECORDS: usize = 10;

/// Where exchange snapshots are read from and how many to read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeDataSettings {
    /// Order books file, one book per line
    #[serde(default = "default_order_books_path")]
    pub order_books_path: PathBuf,

    /// Exchange balances file, one exchange per line
    #[serde(default = "default_balances_path")]
    pub balances_path: PathBuf,

    /// Maximum number of order books (and of balances) to load
    #[serde(default = "default_max_records")]
    pub max_records: usize,
}

fn default_order_books_path() -> PathBuf {
    PathBuf::from(DEFAULT_ORDER_BOOKS_PATH)
}

fn default_balances_path() -> PathBuf {
    PathBuf::from(DEFAULT_BALANCES_PATH)
}

fn default_max_records() -> usize {
    DEFAULT_MAX_RECORDS
}

impl Default for ExchangeDataSettings {
    fn default() -> Self {
        Self {
            order_books_path: default_order_books_path(),
            balances_path: default_balances_path(),
            max_records: default_max_records(),
        }
    }
}

impl ExchangeDataSettings {
    /// Load settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> GatewayResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|error| GatewayError::Io {
            path: path.display().to_string(),
            error,
        })?;
        Self::from_json(&content).map_err(|e| match e {
            GatewayError::Parse { line, error, .. } => GatewayError::Parse {
                path: path.display().to_string(),
                line,
                error,
            },
            other => other,
        })
    }

    /// Load settings from a JSON string
    pub fn from_json(json: &str) -> GatewayResult<Self> {
        let settings: Self = serde_json::from_str(json).map_err(|error| GatewayError::Parse {
            path: "<settings>".to_string(),
            line: error.line(),
            error,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> GatewayResult<()> {
        if self.max_records == 0 {
            return Err(GatewayError::Config(
                "max_records must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_order_books_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.order_books_path = path.into();
        self
    }

    pub fn with_balances_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.balances_path = path.into();
        self
    }

    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }
}
