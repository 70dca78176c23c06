//! envpush CLI - push a local env file into Vercel environment variables
//!
//! Usage: envpush [FILE] [--target preview,production] [--skip KEY] [--dry-run]

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use envpush::application::SyncOptions;
use envpush::config;
use envpush::presentation::cli::Cli;
use envpush::presentation::factory::{create_env_syncer, working_dir_for};
use envpush::presentation::output::{create_event_sink, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let env_dir = working_dir_for(&cli.file);
    let (loaded, warnings) = config::load_for_env_dir(&env_dir, cli.config.as_deref())?;
    if !cli.json {
        for warning in &warnings {
            eprintln!("Warning: {}", warning);
        }
    }

    let config = config::with_env_overrides(loaded)?;
    let config = config::with_cli_overrides(config, cli.overrides());

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let events = create_event_sink(format, cli.verbose, !cli.ascii);

    let mut syncer = create_env_syncer(&config, &cli.file, events);
    syncer.run(
        &cli.file,
        SyncOptions {
            dry_run: cli.dry_run,
        },
    )?;

    Ok(())
}
