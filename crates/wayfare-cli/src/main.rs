//! Wayfare CLI application.
//!
//! Command-line interface over the wayfare-core trip store.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use wayfare_core::{SessionContext, TripStoreBuilder};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        user,
        command,
    } = Args::parse();

    let store = TripStoreBuilder::new()
        .with_database_path(database_file)
        .with_session(SessionContext::new(user))
        .build()
        .await
        .context("Failed to initialize trip store")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(store, renderer);

    info!("Wayfare started");

    match command {
        Some(Commands::Trip { command }) => cli.handle_trip_command(command).await,
        Some(Commands::Event { command }) => cli.handle_event_command(command).await,
        Some(Commands::Member { command }) => cli.handle_member_command(command).await,
        None => cli.list_trips().await,
    }
}
