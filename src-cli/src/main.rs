//! Deck Templates - command-line manager for presentation templates
//!
//! Lists, selects, imports and deletes slide templates kept in a local
//! data directory.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use deck_templates::{JsonFileStore, SettingsManager, TemplateCatalog};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    tracing::debug!("Data directory: {:?}", cli.data_dir);

    let mut settings = match &cli.settings {
        Some(path) => SettingsManager::new(path),
        None => SettingsManager::in_dir(&cli.data_dir),
    };
    let settings = settings.load()?.clone();

    let storage = JsonFileStore::in_dir(&cli.data_dir);
    let mut catalog = TemplateCatalog::with_settings(storage, settings);

    commands::run(cli.command, &mut catalog).await
}
