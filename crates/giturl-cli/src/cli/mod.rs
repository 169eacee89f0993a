//! CLI for giturl.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use giturl_core::config::{self, GiturlConfig, OutputFormat};

use commands::{run_info, run_normalize};

/// Top-level CLI for giturl.
#[derive(Debug, Parser)]
#[command(name = "giturl")]
#[command(about = "giturl: web URLs and repository coordinates from Git remotes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the web URL for each source (git@, git://, git+https://, archive links, ...).
    Normalize {
        /// Repository source locations.
        #[arg(required = true)]
        sources: Vec<String>,
    },

    /// Print host, owner, name and branch for each source.
    Info {
        /// Output format; defaults to `output` from config.toml.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Repository source locations.
        #[arg(required = true)]
        sources: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init().unwrap_or_else(|e| {
            tracing::warn!("config unavailable, using defaults: {:#}", e);
            GiturlConfig::default()
        });
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Normalize { sources } => run_normalize(&sources)?,
            CliCommand::Info { format, sources } => {
                let format = format.map(OutputFormat::from).unwrap_or(cfg.output);
                run_info(&sources, format)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
