//! Bookshelf interactive CLI.
//!
//! # Responsibility
//! - Resolve settings, data directory and logging from flags.
//! - Run the interactive menu over stdin/stdout.

mod error;
mod shell;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use bookshelf_core::{core_version, init_logging, settings_path, Settings};

use crate::error::CliError;
use crate::shell::{Shell, ShellOptions};

#[derive(Parser)]
#[command(name = "bookshelf", version)]
#[command(about = "Manage a book catalog stored in flat text files", long_about = None)]
struct Cli {
    /// Directory for catalog files (defaults to settings, then the executable's directory)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Settings file (defaults to <config_dir>/bookshelf/settings.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for log files (defaults to <data-dir>/logs)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Settings::load(&cli.config.unwrap_or_else(settings_path))?;
    let data_dir = settings.resolve_data_dir(cli.data_dir);

    let log_level = cli
        .log_level
        .unwrap_or_else(|| settings.log_level().to_string());
    let log_dir = cli.log_dir.unwrap_or_else(|| settings.log_dir(&data_dir));
    // A session without log files is still usable.
    if let Err(err) = init_logging(&log_level, &log_dir) {
        eprintln!("warning: {}", CliError::from(err));
    }

    println!("=== Bookshelf {} ===", core_version());
    println!("Files are saved to and loaded from: {}", data_dir.display());

    let options = ShellOptions {
        data_dir,
        default_file: settings.default_file().to_string(),
        top_authors: settings.top_authors(),
    };
    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), options);
    shell.run()
}
