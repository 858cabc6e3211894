//! Error types for the retitling glue and the CLI.
//!
//! Rendering and cleaning never fail; only reading events, responses and
//! command-line input can.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a successful run (including skipped events).
pub const EXIT_SUCCESS: u8 = 0;
/// Exit code for I/O and decoding failures.
pub const EXIT_INTERNAL: u8 = 1;
/// Exit code for invalid arguments or missing input.
pub const EXIT_USAGE: u8 = 2;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The event is not one this tool reacts to.
    #[error("unsupported event '{0}'")]
    UnsupportedEvent(String),

    #[error("event payload has no {0}")]
    MissingPayloadField(&'static str),

    #[error("response contains no pull request")]
    MissingPullRequest,

    #[error("invalid variable '{0}' (expected key=value)")]
    InvalidVariable(String),

    #[error("no duration found in {0:?}")]
    NoDuration(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Io { .. } | Error::Json(_) => EXIT_INTERNAL,
            Error::UnsupportedEvent(_) => EXIT_SUCCESS,
            Error::MissingPayloadField(_)
            | Error::MissingPullRequest
            | Error::InvalidVariable(_)
            | Error::NoDuration(_) => EXIT_USAGE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
