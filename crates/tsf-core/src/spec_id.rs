//! Spec identifiers and their archive locations.

use std::fmt;

use crate::error::FetchError;

/// A 3GPP specification identifier of the form `ab.cde[-f]`, e.g. `25.331`.
///
/// The part before the `.` is the series; the archive groups specs by series
/// under `/Specs/archive/<series>_series/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecId {
    raw: String,
    series: String,
}

impl SpecId {
    pub fn parse(s: &str) -> Result<Self, FetchError> {
        let (series, _) = s
            .split_once('.')
            .ok_or_else(|| FetchError::MalformedSpecId(s.to_string()))?;
        Ok(Self {
            raw: s.to_string(),
            series: series.to_string(),
        })
    }

    /// Series prefix, zero padding preserved as written.
    pub fn series(&self) -> &str {
        &self.series
    }

    /// Remote directory holding every published version of this spec.
    pub fn archive_dir(&self) -> String {
        format!("/Specs/archive/{}_series/{}", self.series, self.raw)
    }
}

impl fmt::Display for SpecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
