use std::process::ExitCode;
use std::sync::Arc;

use bestex_api::cli::{ServerArgs, ServerCommand, parse_args, usage};
use bestex_api::{AppState, create_router};
use bestex_gateway::{ExchangeDataSettings, FileMarketDataSource};

async fn serve(args: ServerArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = match &args.config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path.display());
            ExchangeDataSettings::from_file(path)?
        }
        None => {
            log::info!("Using default configuration");
            ExchangeDataSettings::default()
        }
    };
    log::info!(
        "Order books: {}, balances: {}, max records: {}",
        settings.order_books_path.display(),
        settings.balances_path.display(),
        settings.max_records
    );

    let (host, port) =
        args.bind_address(std::env::var("HOST").ok(), std::env::var("PORT").ok())?;

    let state = Arc::new(AppState::new(FileMarketDataSource::new(settings)));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    log::info!("Best Execution API listening on http://{}:{}/api/", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(ServerCommand::Serve(args)) => args,
        Ok(ServerCommand::Help) => {
            eprintln!("{}", usage());
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", usage());
            return ExitCode::FAILURE;
        }
    };

    match serve(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Server stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}
