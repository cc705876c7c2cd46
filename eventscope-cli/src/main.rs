//! ## eventscope-cli
//! **Command-line front end for the event query library**
//!
//! Loads a feed (an event file or the mock flight log), runs one query and
//! prints the result as a plain-text listing on stdout. Logs go to stderr.

use clap::Parser;
use eventscope_config::EventscopeConfig;
use eventscope_telemetry::logging::EventLogger;

mod commands;
mod error;
mod render;

use commands::Cli;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EventscopeConfig::load_from_path(path)?,
        None => EventscopeConfig::load()?,
    };
    EventLogger::init(&config.telemetry.log_level);

    let events = commands::load_events(&cli, &config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::execute(cli.command, events, &config, &mut out)?;
    Ok(())
}
