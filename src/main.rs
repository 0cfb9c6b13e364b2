//! termpick CLI - interactive pickers for shell scripts
//!
//! Usage: termpick [OPTIONS] <COMMAND>
//!
//! Commands:
//!   one     Pick exactly one item
//!   many    Pick any number of items
//!   browse  Browse a directory tree and pick a path

use anyhow::Result;
use clap::Parser;
use termpick::{Config, UiContext};
use tracing::warn;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::browse::{cmd_browse, BrowseArgs};
use commands::pick::{cmd_many, cmd_one};
use commands::Globals;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            (config.with_env_overrides(), warnings)
        }
        None => Config::load_or_default(),
    };

    termpick::logging::init(&config.log, cli.log_file.as_deref(), cli.verbose)?;
    for warning in &warnings {
        warn!(%warning, "config warning");
        eprintln!("Warning: {}", warning);
    }

    let globals = Globals {
        ctx: UiContext::new(cli.color, &config),
        config,
        json: cli.json,
    };

    match &cli.command {
        Commands::One(pick) => cmd_one(pick, &globals),
        Commands::Many { pick, defaults } => cmd_many(pick, defaults, &globals),
        Commands::Browse {
            path,
            dirs,
            hidden,
            prompt,
            required,
        } => cmd_browse(
            BrowseArgs {
                path,
                prompt,
                dirs: *dirs,
                hidden: *hidden,
                required: *required,
            },
            &globals,
        ),
    }
}
