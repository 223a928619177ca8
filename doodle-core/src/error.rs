//! Error types for the doodle client.

use thiserror::Error;

/// Errors that can occur while resolving, fetching or reading a poll.
#[derive(Error, Debug)]
pub enum DoodleError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Could not reach Doodle: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Doodle returned status {status} for {url}: {body}")]
    Remote {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Could not parse poll document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Poll has not been fetched yet")]
    NotFetched,

    #[error("Poll document has no '{0}'")]
    MissingField(&'static str),

    #[error("Timestamp {0}ms is out of range")]
    InvalidTimestamp(i64),

    #[error("Unknown time zone '{0}'")]
    InvalidTimeZone(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for doodle operations.
pub type DoodleResult<T> = Result<T, DoodleError>;
