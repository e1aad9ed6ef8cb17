//! CLI for the TSF spec fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tsf_core::config;
use tsf_core::filter::WILDCARD;

use commands::run_fetch;

/// Fetch 3GPP technical specifications from the public archive.
///
/// With a concrete RELEASE the newest matching file is downloaded; with the
/// wildcard `*` all matches are printed, newest first.
#[derive(Debug, Parser)]
#[command(name = "tsf", version)]
#[command(about = "tsf: fetch 3GPP technical specifications over FTP", long_about = None)]
pub struct Cli {
    /// Spec identifier, e.g. `25.331` or `21.111-7`.
    pub spec: String,

    /// Release filter: a release number, or `*` for all releases.
    #[arg(default_value = WILDCARD)]
    pub release: String,

    /// Quarter filter: `YYYY-MM` (that month and the two after), or `*`.
    #[arg(default_value = WILDCARD)]
    pub quarter: String,

    /// Override the archive host from the config file.
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Directory to download into (default: config file, then current dir).
    #[arg(long, value_name = "DIR")]
    pub download_dir: Option<PathBuf>,

    /// Listing output format (wildcard release only).
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Print the SHA-256 of the downloaded file.
    #[arg(long)]
    pub sha256: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        if let Some(host) = &cli.host {
            cfg.host = host.clone();
        }
        run_fetch(&cli, &cfg)
    }
}

#[cfg(test)]
mod tests;
