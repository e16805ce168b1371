//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use itemwiki_lib::SchemaVersion;

#[derive(Parser)]
#[command(name = "itemwiki")]
#[command(about = "Fuse scraped item data with wiki infoboxes into normalized JSON", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Input files shared by `build` and `show`.
#[derive(Args, Clone)]
pub(crate) struct InputArgs {
    /// Scraped items: JSON object of id -> item payload
    #[arg(long)]
    pub items: PathBuf,

    /// Item-infobox corpus: JSON object of item name -> wiki markup
    #[arg(long)]
    pub wiki: PathBuf,

    /// Bonuses corpus (defaults to looking on the item page)
    #[arg(long)]
    pub bonuses: Option<PathBuf>,

    /// Buy-limit table: JSON object of item name -> limit
    #[arg(long)]
    pub buy_limits: Option<PathBuf>,

    /// Output schema generation (current, legacy)
    #[arg(long)]
    pub schema: Option<SchemaVersion>,

    /// Base url for derived wiki links
    #[arg(long)]
    pub wiki_base_url: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Enrich every scraped item and write one JSON file per item
    Build {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output directory (created if missing)
        #[arg(short, long, default_value = "items-json")]
        out: PathBuf,

        /// Number of worker tasks
        #[arg(short = 'j', long)]
        workers: Option<usize>,

        /// Pretty-print output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Enrich a single item and print it with its diagnostics
    Show {
        /// Item id
        id: i64,

        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Inspect engine settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,

    /// Write a settings file with the default values
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}
