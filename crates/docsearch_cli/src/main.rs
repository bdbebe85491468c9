//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `docsearch_core` linkage.
//! - Run one search or lookup against a freshly seeded store.
//!
//! Logging is enabled only when a log directory is given; the level falls
//! back to the build-mode default.

mod cli;

use clap::Parser;
use cli::{Cli, Command};
use docsearch_core::{default_log_level, init_logging, DocumentService};
use log::info;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("docsearch_core ping={}", docsearch_core::ping());
    println!("docsearch_core version={}", docsearch_core::core_version());

    let service = DocumentService::seeded();

    match cli.command {
        None => {
            println!("documents={}", service.document_count());
            ExitCode::SUCCESS
        }
        Some(Command::Search { query }) => {
            let query = query.join(" ");
            let hits = service.search_documents(query.as_str());
            info!("event=cli_search module=cli status=ok hits={}", hits.len());
            if hits.is_empty() {
                println!("No results found for \"{query}\"");
            }
            for doc in hits {
                println!("{}\t{}\t{}", doc.id, doc.title, doc.excerpt);
            }
            ExitCode::SUCCESS
        }
        Some(Command::Show { id }) => match service.require_document(id.as_str()) {
            Ok(doc) => {
                println!("{}", doc.title);
                for paragraph in doc.content.split('\n') {
                    println!("  {paragraph}");
                }
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        },
    }
}
