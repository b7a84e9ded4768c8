use clap::Parser;
use fzpick::terminal::Terminal;
use fzpick::{Config, PickError, app, logging};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::parse();

    if let Err(e) = logging::init(config.log_file.as_deref(), &config.log_level) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match app::run(&config, io::stdin().lock(), io::stdout().lock(), Terminal::open) {
        Ok(outcome) => outcome.exit_code(),
        Err(PickError::NoInput) => {
            tracing::info!("empty input");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
