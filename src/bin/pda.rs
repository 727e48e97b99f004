//! pda Binary
//!
//! Parses the command line and runs one command against the real stdio.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use pda::commands::{Command, Session};
use pda::layout::TerminalWidth;
use pda::{Config, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// A key-value store for the command line
#[derive(Parser, Debug)]
#[command(name = "pda")]
#[command(about = "A key-value store for the command line")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    // Logs go to stderr so they never mix with command output
    let filter = EnvFilter::try_from_env("PDA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    tracing::debug!(data_dir = %config.data_dir.display(), "pda v{}", pda::VERSION);

    let store = Store::new(config);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let mut err = io::stderr();

    let mut session = Session {
        store: &store,
        input: &mut input,
        out: &mut out,
        err: &mut err,
        width: TerminalWidth::Detect,
    };

    match cli.command.run(&mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
