//! The `cmsnip` command line.
//!
//! Parsing lives in [`cli`], the work in [`commands`] and formatting in
//! [`output`]. [`run`] ties them together and returns the text to print, so
//! tests can drive commands without spawning a process.

pub mod cli;
pub mod commands;
pub mod output;

use anyhow::Result;

use cmsnip::{Config, EnvReader};

use crate::cli::{Cli, Commands};
use crate::output::Templates;

/// Runs a parsed command line and returns its output.
pub fn run(cli: &Cli, env: &impl EnvReader) -> Result<String> {
    let config = Config::load(cli.config.as_deref(), env)?;
    log::debug!("using {:?}", config);

    let templates = Templates::new()?;
    let format = cli.output;

    let text = match &cli.command {
        Commands::Fields(args) => templates.format("fields", &commands::fields(args)?, format)?,
        Commands::Render(args) => {
            templates.format("render", &commands::render(args, &config)?, format)?
        }
        Commands::Preview(args) => {
            templates.format("preview", &commands::preview(args, &config)?, format)?
        }
        Commands::Search(args) => {
            templates.format("search", &commands::search(args, &config)?, format)?
        }
    };

    Ok(text)
}
