use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wordbank_config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "wordbank",
    version,
    about = "Look up English words and keep a personal vocabulary list"
)]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Storage file holding the personal dictionary
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,

    /// Dictionary endpoint the search term is appended to
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Append search terms to the URL without percent-encoding
    #[arg(long, global = true)]
    pub raw_terms: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up one word and exit
    Lookup {
        word: String,
        /// Also add the word to the personal dictionary
        #[arg(long)]
        save: bool,
    },
    /// Print the personal dictionary
    List,
}

impl Cli {
    /// Flags win over file and environment
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.storage {
            config.store.path = Some(path.clone());
        }
        if let Some(url) = &self.api_url {
            config.lookup.api_url = url.clone();
        }
        if self.raw_terms {
            config.lookup.encode_term = false;
        }
    }
}
