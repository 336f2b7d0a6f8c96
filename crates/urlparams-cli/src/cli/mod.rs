//! CLI for the urlparams event enricher.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use urlparams_core::config::{self, RawConfig};

use commands::{run_completions, run_enrich, run_man, run_normalize, run_schema};

/// Top-level CLI for the urlparams event enricher.
#[derive(Debug, Parser)]
#[command(name = "urlparams")]
#[command(about = "Copy whitelisted URL query parameters into event properties", long_about = None)]
pub struct Cli {
    /// Options file (TOML, or JSON when it ends in .json). Defaults to ~/.config/urlparams/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Enrich newline-delimited JSON events and print them to stdout.
    Enrich {
        /// Read events from this file instead of stdin.
        #[arg(long, value_name = "PATH")]
        input: Option<PathBuf>,
        /// Pass events with an unparseable $current_url through unchanged instead of failing.
        #[arg(long)]
        skip_invalid_urls: bool,
    },

    /// Print the normalized options as JSON.
    Normalize,

    /// Print the option schema as JSON.
    Schema,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

fn load_config(path: Option<&Path>) -> Result<RawConfig> {
    match path {
        Some(p) => config::load_from_path(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Enrich {
                input,
                skip_invalid_urls,
            } => {
                let raw = load_config(cli.config.as_deref())?;
                tracing::debug!("loaded config: {:?}", raw);
                run_enrich(&raw, input.as_deref(), skip_invalid_urls)?;
            }
            CliCommand::Normalize => {
                let raw = load_config(cli.config.as_deref())?;
                run_normalize(&raw)?;
            }
            CliCommand::Schema => run_schema()?,
            CliCommand::Completions { shell } => run_completions(shell, &mut Cli::command()),
            CliCommand::Man => run_man(Cli::command())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
