//! CLI argument parsing for docsearch

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "docsearch")]
#[command(version, about = "Search and view documents in a seeded in-memory store", long_about = None)]
pub struct Cli {
    /// Absolute directory for rolling log files; logging stays off when unset
    #[arg(long, env = "DOCSEARCH_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error); defaults by build mode
    #[arg(long, env = "DOCSEARCH_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List documents whose title or content contains the query
    Search {
        /// Query words, joined with single spaces; empty matches everything
        query: Vec<String>,
    },

    /// Print one document, one paragraph per line
    Show {
        /// Document ID
        #[arg(required = true)]
        id: String,
    },
}
