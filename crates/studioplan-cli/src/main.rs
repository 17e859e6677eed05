//! Studioplan CLI Application
//!
//! Command-line interface for saving, browsing and exporting strategic plans.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use studioplan_core::PlannerBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        remote_url,
        remote_key,
        remote_table,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .with_remote(remote_url, remote_key)
        .with_table(remote_table)
        .build()
        .await
        .context("Failed to initialize planner")?;

    info!("Studioplan started with {} plan store", planner.backend_kind());

    let cli = Cli::new(planner, TerminalRenderer::new(!no_color));
    match command {
        Some(Commands::Plan { command }) => cli.handle_plan_command(command).await,
        None => cli.list_plans().await,
    }
}
