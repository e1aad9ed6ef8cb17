//! The fetch transaction: list the archive directory, filter, and either
//! download the newest match or hand back the listing.

use std::path::{Path, PathBuf};

use crate::config::TsfConfig;
use crate::error::FetchError;
use crate::filter::{self, QuarterFilter, ReleaseFilter};
use crate::listing::{self, DirectoryEntry};
use crate::session::ArchiveSession;
use crate::spec_id::SpecId;

/// Result of one invocation.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Concrete release filter: the newest match, downloaded locally.
    Downloaded { entry: DirectoryEntry, dest: PathBuf },
    /// Wildcard release filter: the full filtered listing, newest first.
    Listing(Vec<DirectoryEntry>),
}

/// Run the whole transaction against the archive.
///
/// Sequential: connect, list, filter/sort, then either download the newest
/// match into `download_dir` or return the listing. With a concrete release
/// filter an empty result is [`FetchError::NoMatchFound`]; with a wildcard
/// it is an empty listing. The session drops, and its connection closes, on
/// every exit path.
pub fn fetch_latest_or_list(
    spec: &SpecId,
    release: ReleaseFilter,
    quarter: QuarterFilter,
    download_dir: &Path,
    cfg: &TsfConfig,
) -> Result<FetchOutcome, FetchError> {
    let dir = spec.archive_dir();
    let mut session = ArchiveSession::connect(cfg)?;

    tracing::info!("listing {}:{}", cfg.host, dir);
    let lines = session.list(&dir)?;
    let entries = listing::parse_listing(&lines);
    tracing::debug!("{} entries, {} listing lines", entries.len(), lines.len());

    let matched = filter::list_matching(entries, release, quarter)?;

    if release.is_any() {
        return Ok(FetchOutcome::Listing(matched));
    }

    let latest = matched.into_iter().next().ok_or(FetchError::NoMatchFound)?;
    let remote = format!("{}/{}", dir, latest.name);
    let dest = download_dir.join(&latest.name);
    tracing::info!("downloading {} to {}", remote, dest.display());
    session.download_to(&remote, &dest)?;

    Ok(FetchOutcome::Downloaded {
        entry: latest,
        dest,
    })
}
