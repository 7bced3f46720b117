//! CLI for the sitelens site analyzer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use sitelens_core::config;
use std::path::PathBuf;

use commands::{run_analyze, run_completions, run_config_path, run_man, run_normalize};

/// Top-level CLI for the sitelens site analyzer.
#[derive(Debug, Parser)]
#[command(name = "sitelens")]
#[command(about = "sitelens: inspect a site's site.json manifest", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a site's manifest and show its overview and items.
    Analyze {
        /// Site URL or direct manifest URL; defaults to `default_url` from config.
        url: Option<String>,

        /// Also write the rendered HTML page to this file.
        #[arg(long, value_name = "PATH")]
        html: Option<PathBuf>,

        /// Print the reference and fetch state as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show the manifest URL and base URL derived from an input.
    Normalize {
        /// Site URL or direct manifest URL.
        input: String,
    },

    /// Print the path of the configuration file.
    ConfigPath,

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Analyze { url, html, json } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_analyze(&cfg, url.as_deref(), html.as_deref(), json).await?;
            }
            CliCommand::Normalize { input } => run_normalize(&input),
            CliCommand::ConfigPath => run_config_path()?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
