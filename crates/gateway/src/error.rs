//! Error types for the gateway crate

use thiserror::Error;

/// Errors raised while loading exchange data
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Failed to read {path}: {error}")]
    Io {
        path: String,
        #[source]
        error: std::io::Error,
    },

    #[error("Failed to parse {path} line {line}: {error}")]
    Parse {
        path: String,
        line: usize,
        #[source]
        error: serde_json::Error,
    },

    #[error("{path} line {line}: too many order books to number")]
    ExchangeIdOverflow { path: String, line: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl GatewayError {
    /// Whether the error means the data files could not be found or read
    pub fn is_missing_data(&self) -> bool {
        matches!(self, GatewayError::Io { .. })
    }
}

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;
