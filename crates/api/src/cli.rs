//! Command line and environment handling for the `bestex-api` binary

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServerArgsError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("Invalid port '{0}'")]
    InvalidPort(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerCommand {
    Serve(ServerArgs),
    Help,
}

/// Options given on the command line. Host and port fall back to the
/// `HOST`/`PORT` environment variables, then to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerArgs {
    pub config_path: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl ServerArgs {
    /// Resolve the listen address from arguments, then `env_host`/`env_port`
    pub fn bind_address(
        &self,
        env_host: Option<String>,
        env_port: Option<String>,
    ) -> Result<(String, u16), ServerArgsError> {
        let host = self
            .host
            .clone()
            .or(env_host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match (self.port, env_port) {
            (Some(port), _) => port,
            (None, Some(raw)) => parse_port(raw)?,
            (None, None) => DEFAULT_PORT,
        };
        Ok((host, port))
    }
}

pub fn usage() -> &'static str {
    r#"Best Execution API - HTTP front end for the best-execution router

USAGE:
    bestex-api [OPTIONS]

OPTIONS:
    --config <PATH>     Load data settings from JSON file
    --host <HOST>       Listen address (overrides HOST)
    --port <PORT>       Listen port (overrides PORT)
    --help              Print this help message

ENVIRONMENT VARIABLES:
    HOST                Server host (default: 0.0.0.0)
    PORT                Server port (default: 8080)
    RUST_LOG            Log level filter (default: info)

ENDPOINTS:
    GET  /api/health
    POST /api/meta-exchange/best-execution  {"orderType":"Buy","amount":2.5}
"#
}

/// Parse arguments, excluding the program name
pub fn parse_args<I>(args: I) -> Result<ServerCommand, ServerArgsError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut parsed = ServerArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(ServerCommand::Help),
            "--config" | "-c" => {
                parsed.config_path = Some(PathBuf::from(value_for(&arg, &mut args)?));
            }
            "--host" => parsed.host = Some(value_for(&arg, &mut args)?),
            "--port" | "-p" => parsed.port = Some(parse_port(value_for(&arg, &mut args)?)?),
            _ => return Err(ServerArgsError::UnknownArgument(arg)),
        }
    }

    Ok(ServerCommand::Serve(parsed))
}

fn parse_port(raw: String) -> Result<u16, ServerArgsError> {
    match raw.trim().parse::<u16>() {
        Ok(port) => Ok(port),
        Err(_) => Err(ServerArgsError::InvalidPort(raw)),
    }
}

fn value_for(
    flag: &str,
    args: &mut impl Iterator<Item = String>,
) -> Result<String, ServerArgsError> {
    args.next()
        .ok_or_else(|| ServerArgsError::MissingValue(flag.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serve(args: &[&str]) -> ServerArgs {
        match parse_args(args.iter().copied()).unwrap() {
            ServerCommand::Serve(args) => args,
            ServerCommand::Help => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_no_arguments() {
        let empty: [&str; 0] = [];
        assert_eq!(
            parse_args(empty).unwrap(),
            ServerCommand::Serve(ServerArgs::default())
        );
    }

    #[test]
    fn test_options() {
        let args = serve(&["--config", "config/bestex.json", "--host", "127.0.0.1", "-p", "9000"]);
        assert_eq!(args.config_path, Some(PathBuf::from("config/bestex.json")));
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(9000));
        assert_eq!(parse_args(["-p", "1", "--help"]).unwrap(), ServerCommand::Help);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_args(["--config"]).unwrap_err(),
            ServerArgsError::MissingValue("--config".into())
        );
        assert_eq!(
            parse_args(["--port", "70000"]).unwrap_err(),
            ServerArgsError::InvalidPort("70000".into())
        );
        assert_eq!(
            parse_args(["buy"]).unwrap_err(),
            ServerArgsError::UnknownArgument("buy".into())
        );
    }

    #[test]
    fn test_bind_address_precedence() {
        let none = ServerArgs::default();
        assert_eq!(
            none.bind_address(None, None).unwrap(),
            (DEFAULT_HOST.to_string(), DEFAULT_PORT)
        );
        assert_eq!(
            none.bind_address(Some("localhost".into()), Some("9100".into()))
                .unwrap(),
            ("localhost".to_string(), 9100)
        );
        assert_eq!(
            none.bind_address(None, Some("http".into())).unwrap_err(),
            ServerArgsError::InvalidPort("http".into())
        );

        let explicit = serve(&["--host", "127.0.0.1", "--port", "7000"]);
        assert_eq!(
            explicit
                .bind_address(Some("localhost".into()), Some("bad".into()))
                .unwrap(),
            ("127.0.0.1".to_string(), 7000)
        );
    }
}
