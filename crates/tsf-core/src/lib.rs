pub mod config;
pub mod logging;

// Core modules
pub mod checksum;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod listing;
pub mod release;
pub mod session;
pub mod spec_id;

pub use error::FetchError;
pub use fetch::{fetch_latest_or_list, FetchOutcome};
