use std::process::ExitCode;

use bestex_gateway::FileMarketDataSource;
use bestex_runner::{BestExecutionService, CliArgs, CliCommand, parse_args, usage};

fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = args.settings()?;
    log::info!(
        "Order books: {}, balances: {}, max records: {}",
        settings.order_books_path.display(),
        settings.balances_path.display(),
        settings.max_records
    );

    let service = BestExecutionService::with_source(FileMarketDataSource::new(settings));
    let report = service.execute(args.side, args.amount)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", usage());
            return ExitCode::FAILURE;
        }
    };

    let args = match command {
        CliCommand::Help => {
            eprintln!("{}", usage());
            return ExitCode::SUCCESS;
        }
        CliCommand::Run(args) => args,
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", usage());
            ExitCode::FAILURE
        }
    }
}
