//! CLI for the Leitura daily reading sender.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use leitura_core::config;

use commands::{run_next, run_reset, run_send, run_status, run_trigger};

/// Top-level CLI for the Leitura daily reading sender.
#[derive(Debug, Parser)]
#[command(name = "leitura")]
#[command(about = "Leitura: daily Bible-reading scheduler and sender", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the hourly trigger loop (delivers once per day inside the daytime window).
    Run {
        /// Run a single cycle immediately and exit instead of looping.
        #[arg(long)]
        once: bool,
    },

    /// Preview today's batch without sending or persisting anything.
    Next,

    /// Run one delivery cycle now.
    Send {
        /// Deliver even if today's reading already went out.
        #[arg(long)]
        force: bool,
    },

    /// Show the current reading position and corpus stats.
    Status,

    /// Reset the persisted position to the start of the corpus.
    Reset,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run { once } => run_trigger(&cfg, once).await?,
            CliCommand::Next => run_next(&cfg)?,
            CliCommand::Send { force } => run_send(&cfg, force)?,
            CliCommand::Status => run_status(&cfg)?,
            CliCommand::Reset => run_reset(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
