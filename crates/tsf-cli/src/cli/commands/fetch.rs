//! `tsf <spec> [release] [quarter]` – run the fetch transaction and render
//! the outcome.

use anyhow::{Context, Result};
use std::path::PathBuf;

use tsf_core::checksum;
use tsf_core::config::TsfConfig;
use tsf_core::fetch::{fetch_latest_or_list, FetchOutcome};
use tsf_core::filter::{QuarterFilter, ReleaseFilter};
use tsf_core::listing::DirectoryEntry;
use tsf_core::spec_id::SpecId;

use crate::cli::{Cli, OutputFormat};

pub fn run_fetch(cli: &Cli, cfg: &TsfConfig) -> Result<()> {
    let spec = SpecId::parse(&cli.spec)?;
    let release = ReleaseFilter::from_arg(&cli.release)?;
    let quarter = QuarterFilter::from_arg(&cli.quarter)?;
    let download_dir = resolve_download_dir(cli, cfg)?;

    match fetch_latest_or_list(&spec, release, quarter, &download_dir, cfg)? {
        FetchOutcome::Listing(entries) => match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
            OutputFormat::Table => print_table(&entries),
        },
        FetchOutcome::Downloaded { entry, dest } => {
            println!("Downloaded {} to {}", entry.name, dest.display());
            if cli.sha256 {
                let digest = checksum::sha256_path(&dest)
                    .with_context(|| format!("checksum {}", dest.display()))?;
                println!("sha256  {digest}");
            }
            println!("Done");
        }
    }
    Ok(())
}

/// CLI flag wins over the config file; default is the current directory.
fn resolve_download_dir(cli: &Cli, cfg: &TsfConfig) -> Result<PathBuf> {
    if let Some(dir) = &cli.download_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = &cfg.download_dir {
        return Ok(dir.clone());
    }
    Ok(std::env::current_dir()?)
}

fn print_table(entries: &[DirectoryEntry]) {
    if entries.is_empty() {
        println!("No matching files.");
        return;
    }
    println!("{:<17} {:<12} {}", "MODIFIED", "SIZE", "NAME");
    for e in entries {
        let size = e
            .size
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<17} {:<12} {}",
            e.modified.format("%Y-%m-%d %H:%M"),
            size,
            e.name
        );
    }
}
