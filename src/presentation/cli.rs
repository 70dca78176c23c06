//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::config::CliOverrides;
use crate::domain::value_objects::TargetEnvironment;

/// envpush - push a local .env file into Vercel environment variables
#[derive(Parser, Debug)]
#[command(name = "envpush")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Each key is removed and re-added per target with `vercel env rm` / `vercel env add`."
)]
pub struct Cli {
    /// Env file to push
    #[arg(default_value = ".env.local")]
    pub file: PathBuf,

    /// Target environments (replaces configured targets)
    #[arg(short, long, value_delimiter = ',', value_enum)]
    pub target: Option<Vec<TargetEnvironment>>,

    /// Extra keys to skip (added to the configured skip set)
    #[arg(short, long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Provider CLI executable
    #[arg(long, value_name = "PATH")]
    pub bin: Option<PathBuf>,

    /// Config file (defaults to envpush.toml next to the env file)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show what would be pushed without calling the provider
    #[arg(long)]
    pub dry_run: bool,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Use ASCII icons instead of unicode
    #[arg(long)]
    pub ascii: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Config overrides carried by the flags
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            targets: self.target.clone(),
            skip: self.skip.clone(),
            bin: self.bin.clone(),
        }
    }
}
