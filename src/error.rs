//! Error types for gphotos-dl
//!
//! Every error names the phase it came from (album listing, a media search for
//! one album or category, a binary download) so a failed run can be diagnosed
//! from the single error that is reported.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gphotos-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for gphotos-dl
///
/// No layer of the library recovers from an error locally. Concurrent fan-out
/// collapses to the first error reported; later ones are logged and dropped.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller input rejected before any network call (e.g. empty access token)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "api_base_url")
        key: Option<String>,
    },

    /// The endpoint could not be reached (connection, DNS, timeout, body read)
    #[error("transport error during {scope}: {source}")]
    Transport {
        /// Phase that issued the request (e.g., "media search for album a1")
        scope: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success HTTP status
    #[error("{scope} failed with status {status}")]
    RemoteStatus {
        /// Phase that issued the request
        scope: String,
        /// Status text as reported by the service (e.g., "500 Internal Server Error")
        status: String,
    },

    /// The response body did not match the expected page schema
    #[error("could not decode response for {scope}: {source}")]
    Decode {
        /// Phase that issued the request
        scope: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A destination directory or file could not be created or written
    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        /// Path that was being created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A fan-out task panicked or was aborted before reporting a result
    #[error("task failed during {scope}: {message}")]
    TaskFailed {
        /// Fan-out phase the task belonged to
        scope: String,
        /// Join error description
        message: String,
    },
}

impl Error {
    pub(crate) fn transport(scope: impl Into<String>, source: reqwest::Error) -> Self {
        Error::Transport {
            scope: scope.into(),
            source,
        }
    }

    pub(crate) fn decode(scope: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Decode {
            scope: scope.into(),
            source,
        }
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Machine-readable error code, stable across releases
    pub fn error_code(&self) -> &str {
        match self {
            Error::InvalidInput(_) => "invalid_input",
            Error::Config { .. } => "config_error",
            Error::Transport { .. } => "transport_error",
            Error::RemoteStatus { .. } => "remote_status_error",
            Error::Decode { .. } => "decode_error",
            Error::Filesystem { .. } => "filesystem_error",
            Error::TaskFailed { .. } => "task_failed",
        }
    }

    /// Process exit status a command-line front end should use for this error
    ///
    /// Input and configuration problems map to 2 (usage), remote failures to 3,
    /// local filesystem failures to 4 and everything else to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidInput(_) | Error::Config { .. } => 2,
            Error::Transport { .. } | Error::RemoteStatus { .. } | Error::Decode { .. } => 3,
            Error::Filesystem { .. } => 4,
            Error::TaskFailed { .. } => 1,
        }
    }
}
