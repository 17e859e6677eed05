use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::PlanCommands;

/// Command-line front end for the Studioplan strategic planner
///
/// Saved plans live in a remote store when both a remote URL and key are
/// given, and in a local SQLite database otherwise.
#[derive(Parser)]
#[command(version, about, name = "sp")]
pub struct Args {
    /// Path to the SQLite database file used when no remote store is
    /// configured. Defaults to $XDG_DATA_HOME/studioplan/studioplan.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Base URL of the remote plan store
    #[arg(long, global = true, env = "SUPABASE_URL")]
    pub remote_url: Option<String>,

    /// Access key for the remote plan store
    #[arg(long, global = true, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub remote_key: Option<String>,

    /// Table holding saved plans in the remote store
    #[arg(long, global = true)]
    pub remote_table: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Studioplan CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage saved plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
}
