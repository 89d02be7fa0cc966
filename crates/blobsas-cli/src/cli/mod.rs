//! CLI for inspecting blob storage URLs and SAS tokens.

mod commands;
mod output;

use anyhow::Result;
use blobsas_core::config::{self, OutputFormat};
use clap::{Parser, Subcommand};

use commands::{
    run_constants, run_host_style, run_normalize, run_parse, run_sas, run_with_snapshot,
    run_with_version,
};
use output::Output;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "blobsas")]
#[command(about = "blobsas: inspect blob storage URLs and SAS tokens", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split a storage URL into host, account, container, blob, snapshot, version and SAS.
    Parse {
        /// Container or blob URL.
        url: String,
        /// Print JSON regardless of the configured output format.
        #[arg(long)]
        json: bool,
    },

    /// Re-print a storage URL in canonical form. `sig` is masked when
    /// `redact_signature` is set.
    Normalize {
        /// Container or blob URL.
        url: String,
    },

    /// Decode a SAS token (with or without leading `?`) and print its fields.
    Sas {
        /// Query string such as `sv=...&sig=...`.
        token: String,
        /// Print JSON regardless of the configured output format.
        #[arg(long)]
        json: bool,
    },

    /// Point a blob URL at a snapshot. An empty snapshot addresses the base blob.
    WithSnapshot {
        /// Blob URL.
        url: String,
        /// Snapshot timestamp.
        snapshot: String,
    },

    /// Point a blob URL at a version. An empty id addresses the base blob.
    WithVersion {
        /// Blob URL.
        url: String,
        /// Version id.
        version_id: String,
    },

    /// Report whether a host is IP endpoint style (account in the path).
    HostStyle {
        /// Host, optionally with `:port`.
        host: String,
    },

    /// Show the SAS version and accepted time formats.
    Constants,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let output = |json: bool| Output {
            json: json || cfg.output == OutputFormat::Json,
            redact_signature: cfg.redact_signature,
        };

        match cli.command {
            CliCommand::Parse { url, json } => run_parse(&url, &output(json))?,
            CliCommand::Normalize { url } => run_normalize(&url, &output(false))?,
            CliCommand::Sas { token, json } => run_sas(&token, &output(json))?,
            CliCommand::WithSnapshot { url, snapshot } => run_with_snapshot(&url, &snapshot)?,
            CliCommand::WithVersion { url, version_id } => run_with_version(&url, &version_id)?,
            CliCommand::HostStyle { host } => run_host_style(&host),
            CliCommand::Constants => run_constants(),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
