//! Release numbers encoded in archive file names.
//!
//! Archive files are named `<base>-<suffix>.zip`, where the suffix spells
//! the spec version. Six-character suffixes carry the release in their first
//! two characters as decimal; three-character suffixes encode it in the
//! leading character, 1-indexed into [`RELEASE_ALPHABET`].

use crate::error::FetchError;

/// `1` → 1 … `9` → 9, `a` → 10 … `z` → 35.
const RELEASE_ALPHABET: &str = "123456789abcdefghijklmnopqrstuvwxyz";

/// Decode a version suffix into its release number.
pub fn parse_release(suffix: &str) -> Result<u32, FetchError> {
    let err = || FetchError::UnrecognizedVersionSuffix(suffix.to_string());
    match suffix.chars().count() {
        6 => {
            let two: String = suffix.chars().take(2).collect();
            two.parse::<u32>().map_err(|_| err())
        }
        3 => {
            let first = suffix.chars().next().ok_or_else(err)?;
            // ASCII alphabet, so the byte index is the character index.
            RELEASE_ALPHABET
                .find(first)
                .map(|i| i as u32 + 1)
                .ok_or_else(err)
        }
        _ => Err(err()),
    }
}

/// Derive the release of a remote file from its name.
///
/// Strips the extension, splits the stem on its last `-`, and decodes the
/// trailing suffix. A stem without a hyphen violates the archive's naming
/// contract and is a malformed-input error.
pub fn release_of(file_name: &str) -> Result<u32, FetchError> {
    let stem = std::path::Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    let (_, suffix) = stem
        .rsplit_once('-')
        .ok_or_else(|| FetchError::MalformedFilename(file_name.to_string()))?;
    parse_release(suffix)
}
