//! Command line definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "deck-templates", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding persisted templates and the selection
    #[arg(long, env = "DECK_TEMPLATES_DIR", default_value = ".deck-templates")]
    pub data_dir: PathBuf,

    /// Settings file (defaults to settings.json in the data directory)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List built-in and custom templates
    List,
    /// Print a template as JSON (the selected one by default)
    Show {
        /// Template id
        id: Option<String>,
    },
    /// Select the template used for export
    Select {
        /// Template id
        id: String,
    },
    /// Extract a template from a .pptx file and add it to the catalog
    Import {
        /// Path to the presentation package
        file: PathBuf,
        /// Select the imported template
        #[arg(long)]
        select: bool,
    },
    /// Delete a custom template
    Delete {
        /// Template id
        id: String,
    },
}
