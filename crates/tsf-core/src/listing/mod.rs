//! FTP directory listings.
//!
//! The archive answers `LIST` with DOS-style lines:
//!
//! ```text
//! 03-15-24  02:30PM              4412167 25331-i60.zip
//! 12-07-21  10:14AM       <DIR>          2001-06
//! ```

mod timestamp;

pub use timestamp::parse_modified;

use chrono::NaiveDateTime;
use serde::Serialize;

/// Kind of remote entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
}

/// One remote file or directory, as read from a `LIST` response.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryEntry {
    /// Remote file name, e.g. `25331-i60.zip`.
    pub name: String,
    /// Modification timestamp exactly as the server printed it.
    pub raw_modified: String,
    /// Parsed modification timestamp.
    pub modified: NaiveDateTime,
    /// Size in bytes; absent for directories.
    pub size: Option<u64>,
    pub kind: EntryKind,
}

/// Parse raw `LIST` lines into entries.
///
/// Lines that do not match the DOS listing shape (banners, blanks) are
/// skipped with a debug log.
pub fn parse_listing(lines: &[String]) -> Vec<DirectoryEntry> {
    lines
        .iter()
        .filter_map(|line| {
            let entry = parse_line(line);
            if entry.is_none() && !line.trim().is_empty() {
                tracing::debug!("skipping unrecognized listing line: {:?}", line.trim());
            }
            entry
        })
        .collect()
}

fn parse_line(line: &str) -> Option<DirectoryEntry> {
    let (date, rest) = split_token(line)?;
    let (time, rest) = split_token(rest)?;
    let (size_or_dir, name) = split_token(rest)?;
    if name.is_empty() {
        return None;
    }

    let raw_modified = format!("{date} {time}");
    let modified = timestamp::parse_modified(&raw_modified).ok()?;

    let (kind, size) = if size_or_dir == "<DIR>" {
        (EntryKind::Dir, None)
    } else {
        (EntryKind::File, Some(size_or_dir.parse().ok()?))
    };

    Some(DirectoryEntry {
        name: name.to_string(),
        raw_modified,
        modified,
        size,
        kind,
    })
}

/// Split off the first whitespace-delimited token; the remainder keeps any
/// interior spaces (file names may contain them).
fn split_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(i) => Some((&s[..i], s[i..].trim_start().trim_end())),
        None => Some((s, "")),
    }
}
