//! Release and quarter filters over directory listings.

use chrono::{Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::FetchError;
use crate::listing::DirectoryEntry;
use crate::release;

/// Wildcard token accepted for both filters.
pub const WILDCARD: &str = "*";

/// Release filter: a concrete release number, or pass-everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseFilter {
    Any,
    Exact(u32),
}

impl ReleaseFilter {
    /// Parse a CLI argument: `*` or a release number ≥ 1.
    pub fn from_arg(arg: &str) -> Result<Self, FetchError> {
        if arg == WILDCARD {
            return Ok(Self::Any);
        }
        match arg.parse::<u32>() {
            Ok(n) if n >= 1 => Ok(Self::Exact(n)),
            _ => Err(FetchError::MalformedRelease(arg.to_string())),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

/// Quarter filter: a half-open three-month window, or pass-everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuarterFilter {
    Any,
    Window {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl QuarterFilter {
    /// Parse a CLI argument: `*` or `YYYY-MM`. The window runs from the first
    /// of that month to the first of the month three months later, month
    /// arithmetic carrying into the year.
    pub fn from_arg(arg: &str) -> Result<Self, FetchError> {
        if arg == WILDCARD {
            return Ok(Self::Any);
        }
        let err = || FetchError::MalformedQuarter(arg.to_string());

        let (y, m) = arg.split_once('-').ok_or_else(err)?;
        let year: i32 = y.parse().map_err(|_| err())?;
        let month: u32 = m.parse().map_err(|_| err())?;
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(err)?;
        let end = start.checked_add_months(Months::new(3)).ok_or_else(err)?;

        Ok(Self::Window {
            start: start.and_time(NaiveTime::MIN),
            end: end.and_time(NaiveTime::MIN),
        })
    }

    fn contains(&self, t: NaiveDateTime) -> bool {
        match self {
            Self::Any => true,
            Self::Window { start, end } => t >= *start && t < *end,
        }
    }
}

/// Filter entries by release and quarter, newest first.
///
/// The release is derived from every entry's file name before the filter is
/// consulted, so a name without a hyphen is a malformed-input error even
/// under a wildcard release.
pub fn list_matching(
    entries: Vec<DirectoryEntry>,
    release_filter: ReleaseFilter,
    quarter: QuarterFilter,
) -> Result<Vec<DirectoryEntry>, FetchError> {
    let mut matched = Vec::new();
    for entry in entries {
        let entry_release = release::release_of(&entry.name)?;
        if let ReleaseFilter::Exact(want) = release_filter {
            if entry_release != want {
                continue;
            }
        }
        if !quarter.contains(entry.modified) {
            continue;
        }
        matched.push(entry);
    }
    // Stable sort: entries with equal timestamps keep their listing order.
    matched.sort_by(|a, b| b.modified.cmp(&a.modified));
    Ok(matched)
}
