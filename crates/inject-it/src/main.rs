//! inject-it - Entry Point

use std::io;
use std::process::ExitCode;

use clap::Parser;
use inject_it::Cli;
use inject_it::infrastructure::{init_logging, log_config_source};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match cli.load_config() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(1);
        }
    };
    let config = loaded.config;
    if let Err(e) = init_logging(&config.logging) {
        eprintln!("error: {e}");
        return ExitCode::from(1);
    }
    log_config_source(loaded.source.as_deref());

    let stdout = io::stdout();
    match cli.execute(&config, &mut stdout.lock()) {
        Ok(status) => status.exit_code(),
        Err(e) => {
            tracing::error!(error = %e, "Migration aborted");
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
