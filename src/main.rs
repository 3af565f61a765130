//! Main entry point for the bndlview CLI application.
//!
//! Argument and bundle errors are reported on stderr before the terminal is
//! touched; once the table is up, the terminal guard restores the screen on
//! every way out.

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use std::fs::File;
use std::io;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bndlview::cli::LOG_ENV;
use bndlview::ui::{Session, TerminalGuard, TerminalInput};
use bndlview::{Cli, Extractor, LocalFileReader, open};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Open the bundle, then browse it until the user quits.
fn run(cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let reader = LocalFileReader::new(&cli.file)
        .with_context(|| format!("{}: could not open", cli.file.display()))?;
    let table = open(&reader)?;
    info!(path = %cli.file.display(), entries = table.len(), "opened bundle");

    let extractor = Extractor::new(&reader, &cli.output_dir);

    let guard = TerminalGuard::enter().context("could not set up the terminal")?;
    let terminal = guard.size()?;
    let mut session = Session::new(table, extractor, io::stdout(), cli.title(), terminal);
    session.run(&mut TerminalInput)?;
    drop(guard);

    Ok(())
}

/// Send `tracing` output to `path`; stdout and stderr belong to the UI.
fn init_logging(path: &std::path::Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("{}: could not create log file", path.display()))?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
