//! Terminal error kinds for the fetch pipeline.

use thiserror::Error;

/// Errors from spec-id parsing, listing parsing, filtering, and the FTP
/// transport. All are terminal: one invocation is a single-shot transaction
/// with no retry.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Spec identifier has no `.` separating series from number.
    #[error("spec must be in the form ab.cde[-f], got {0:?}")]
    MalformedSpecId(String),

    /// Remote file name has no `-` separating base id from version suffix.
    #[error("file name must end in -xyz or -uvwxyz, got {0:?}")]
    MalformedFilename(String),

    /// Version suffix is not 3 or 6 characters, or its leading character is
    /// outside the release alphabet.
    #[error("unrecognized version suffix {0:?}")]
    UnrecognizedVersionSuffix(String),

    /// Release filter argument is neither `*` nor a release number.
    #[error("release filter must be `*` or a release number, got {0:?}")]
    MalformedRelease(String),

    /// Quarter filter argument is neither `*` nor `YYYY-MM`.
    #[error("quarter filter must be `*` or YYYY-MM, got {0:?}")]
    MalformedQuarter(String),

    /// Listing timestamp does not match `MM-DD-YY HH:mm(AM|PM)`.
    #[error("unparseable listing timestamp {0:?}")]
    MalformedTimestamp(String),

    /// Nothing survived filtering.
    #[error("the requested spec was not found")]
    NoMatchFound,

    /// Archive host did not form a valid endpoint URL.
    #[error("invalid archive endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// libcurl failure (connect, list, or transfer).
    #[error("transfer failed: {0}")]
    Transfer(#[from] curl::Error),

    /// Local filesystem failure while writing a download.
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
}
