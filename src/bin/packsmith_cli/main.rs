// ABOUTME: Packsmith CLI - command-line management tool for the recipe engine
// ABOUTME: Catalog building/export, dump capture, identifier search, and recipe lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors
//!
//! Usage:
//! ```bash
//! # Build the identifier catalog from the installed mods
//! packsmith-cli catalog build
//!
//! # Export every identifier to a plain-text list, one per line
//! packsmith-cli catalog export --output modpack_item_ids.txt
//!
//! # Capture the latest recipe dump out of the server log
//! packsmith-cli dump capture
//!
//! # Resolve free text to catalogued identifiers
//! packsmith-cli search --query "iron gear" --top-k 5
//!
//! # Find recipes consuming or producing an identifier
//! packsmith-cli recipes find --identifier modx:iron_gear --role ingredient
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use packsmith::config::EngineConfig;
use packsmith::logging::{LogFormat, LoggingConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "packsmith-cli",
    about = "Packsmith recipe engine management CLI",
    long_about = "Command-line tool for building the identifier catalog, capturing recipe dumps, and querying the packsmith recipe engine."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Mods directory override
    #[arg(long, global = true)]
    mods_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Identifier catalog commands
    Catalog {
        #[command(subcommand)]
        action: CatalogCommand,
    },

    /// Recipe dump commands
    Dump {
        #[command(subcommand)]
        action: DumpCommand,
    },

    /// Resolve free text to catalogued identifiers
    Search {
        /// Natural-language item description
        #[arg(long)]
        query: String,

        /// Number of results to return
        #[arg(long)]
        top_k: Option<usize>,
    },

    /// Recipe corpus commands
    Recipes {
        #[command(subcommand)]
        action: RecipesCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CatalogCommand {
    /// Scan the mods directory and report catalog statistics
    Build,

    /// Write every catalogued identifier to a file, one per line
    Export {
        /// Output file path
        #[arg(long)]
        output: PathBuf,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum DumpCommand {
    /// Scrape the latest recipe dump out of the server log into the cache
    Capture {
        /// Server log override
        #[arg(long)]
        log: Option<PathBuf>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RecipesCommand {
    /// Find recipes by exact identifier
    Find {
        /// The identifier to look up
        #[arg(long)]
        identifier: String,

        /// Role to match: ingredient, result, or either
        #[arg(long, default_value = "either")]
        role: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: if cli.verbose { "debug".into() } else { "warn".into() },
        format: LogFormat::Compact,
    };
    logging.init()?;

    let mut config = EngineConfig::from_env()?;
    if let Some(mods_dir) = cli.mods_dir {
        config.mods_dir = mods_dir;
    }

    match cli.command {
        Command::Catalog { action } => match action {
            CatalogCommand::Build => commands::catalog_build(&config).await?,
            CatalogCommand::Export { output } => {
                commands::catalog_export(&config, &output).await?;
            }
        },
        Command::Dump { action } => match action {
            DumpCommand::Capture { log } => commands::dump_capture(&config, log)?,
        },
        Command::Search { query, top_k } => commands::search(&config, &query, top_k).await?,
        Command::Recipes { action } => match action {
            RecipesCommand::Find { identifier, role } => {
                commands::recipes_find(&config, &identifier, &role).await?;
            }
        },
    }

    Ok(())
}
