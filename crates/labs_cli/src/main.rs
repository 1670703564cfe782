//! `labs` command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Dispatch to the calculator or the notes/tasks services and print JSON.
//!
//! # Exit codes
//! - `0` success, `2` not found, `1` any other failure.

mod commands;

use clap::{Parser, Subcommand};
use labs_core::EntityId;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "labs", version, about = "Lab calculator and notes/tasks store")]
pub(crate) struct Cli {
    /// SQLite database file for notas/tareas.
    #[arg(long, env = "LABS_DB", default_value = "labs.sqlite3")]
    pub db: PathBuf,
    /// trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, env = "LABS_LOG_LEVEL")]
    pub log_level: Option<String>,
    /// Absolute directory for rotated log files. Logging is off when unset.
    #[arg(long, env = "LABS_LOG_DIR")]
    pub log_dir: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Adds two non-negative integers.
    Sum {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Subtracts `subtrahend` from `minuend`.
    Difference {
        #[arg(allow_negative_numbers = true)]
        minuend: i64,
        #[arg(allow_negative_numbers = true)]
        subtrahend: i64,
    },
    /// Notes resource.
    Notas {
        #[command(subcommand)]
        action: EntityAction,
    },
    /// Tasks resource.
    Tareas {
        #[command(subcommand)]
        action: EntityAction,
    },
}

#[derive(Debug, Subcommand)]
pub(crate) enum EntityAction {
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    List,
    Get {
        id: EntityId,
    },
    /// Partial update; omitted flags keep stored values.
    Update {
        id: EntityId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        /// Tareas only.
        #[arg(long)]
        completed: Option<bool>,
    },
    Delete {
        id: EntityId,
    },
    /// Case-sensitive title substring search.
    Search {
        title: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match commands::run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
