//! Console argument parsing for the `bestex` binary

use std::path::PathBuf;
use std::str::FromStr;

use bestex_core::{Quantity, Side};
use bestex_gateway::{ExchangeDataSettings, GatewayResult};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    #[error("Missing order type (buy or sell)")]
    MissingSide,

    #[error("Missing amount")]
    MissingAmount,

    #[error("Invalid order type '{0}', expected buy or sell")]
    InvalidSide(String),

    #[error("Invalid amount '{0}', expected a positive decimal")]
    InvalidAmount(String),

    #[error("Invalid max records '{0}', expected a positive integer")]
    InvalidMaxRecords(String),

    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(CliArgs),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub side: Side,
    pub amount: Quantity,
    pub config_path: Option<PathBuf>,
    pub order_books_path: Option<PathBuf>,
    pub balances_path: Option<PathBuf>,
    pub max_records: Option<usize>,
}

impl CliArgs {
    /// Settings from `--config` (or defaults) with `-o`, `-c` and `-n` applied on top
    pub fn settings(&self) -> GatewayResult<ExchangeDataSettings> {
        let mut settings = match &self.config_path {
            Some(path) => ExchangeDataSettings::from_file(path)?,
            None => ExchangeDataSettings::default(),
        };

        if let Some(path) = &self.order_books_path {
            settings = settings.with_order_books_path(path);
        }
        if let Some(path) = &self.balances_path {
            settings = settings.with_balances_path(path);
        }
        if let Some(max) = self.max_records {
            settings = settings.with_max_records(max);
        }

        Ok(settings)
    }
}

pub fn usage() -> &'static str {
    r#"Best Execution - route an order across exchange order books

USAGE:
    bestex <buy|sell> <amount> [OPTIONS]

OPTIONS:
    -o <PATH>           Order books file (default: ./data/order_books_data)
    -c <PATH>           Exchange balances file (default: ./data/crypto_exchanges)
    -n <COUNT>          Maximum records to load from each file (default: 10)
    --config <PATH>     Load data settings from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    bestex buy 5.5
    bestex sell 2 -o ./data/order_books_data -c ./data/crypto_exchanges -n 3
"#
}

/// Parse arguments, excluding the program name
pub fn parse_args<I>(args: I) -> Result<CliCommand, CliError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut positional: Vec<String> = Vec::new();
    let mut config_path = None;
    let mut order_books_path = None;
    let mut balances_path = None;
    let mut max_records = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--config" => config_path = Some(PathBuf::from(value_for(&arg, &mut args)?)),
            "-o" => order_books_path = Some(PathBuf::from(value_for(&arg, &mut args)?)),
            "-c" => balances_path = Some(PathBuf::from(value_for(&arg, &mut args)?)),
            "-n" => {
                let raw = value_for(&arg, &mut args)?;
                match raw.parse::<usize>() {
                    Ok(n) if n > 0 => max_records = Some(n),
                    _ => return Err(CliError::InvalidMaxRecords(raw)),
                }
            }
            flag if flag.starts_with('-') && Decimal::from_str(flag).is_err() => {
                return Err(CliError::UnknownArgument(arg));
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let raw_side = positional.next().ok_or(CliError::MissingSide)?;
    let side = Side::try_from(raw_side.as_str()).map_err(|_| CliError::InvalidSide(raw_side))?;

    let raw_amount = positional.next().ok_or(CliError::MissingAmount)?;
    let amount = match Decimal::from_str(&raw_amount) {
        Ok(amount) if amount > Decimal::ZERO => amount,
        _ => return Err(CliError::InvalidAmount(raw_amount)),
    };

    if let Some(extra) = positional.next() {
        return Err(CliError::UnknownArgument(extra));
    }

    Ok(CliCommand::Run(CliArgs {
        side,
        amount,
        config_path,
        order_books_path,
        balances_path,
        max_records,
    }))
}

fn value_for(flag: &str, args: &mut impl Iterator<Item = String>) -> Result<String, CliError> {
    args.next()
        .ok_or_else(|| CliError::MissingValue(flag.to_string()))
}
