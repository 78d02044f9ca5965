//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::fs::DEFAULT_SNAPSHOT_FILE;

/// `Pomotask` - pomodoro timer and to-do list
///
/// Counts down 25-minute work periods and 5-minute breaks while you tick
/// off tasks. Tasks are saved to a JSON file after every change.
#[derive(Parser, Debug)]
#[command(name = "pomotask", version, about, long_about = None)]
pub struct Args {
    /// Task file to load at startup and save after every change
    #[arg(short, long, default_value = DEFAULT_SNAPSHOT_FILE)]
    pub file: PathBuf,

    /// Write diagnostics to this file (disabled when omitted)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
