use std::io;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Convenience result type for report output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Why a single token could not become a [`crate::types::NumericValue`].
///
/// The `Display` output is the human-readable reason that ends up in the report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The token parsed, but to NaN.
    #[error("NaN not allowed")]
    NotANumber { token: String },

    /// The token parsed, but to positive or negative infinity.
    #[error("Inf not allowed")]
    Infinite { token: String },

    /// The token is not a decimal number at all.
    #[error("{source}")]
    Unparseable {
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

impl ValidationError {
    /// The raw token text that failed validation.
    pub fn token(&self) -> &str {
        match self {
            Self::NotANumber { token } | Self::Infinite { token } | Self::Unparseable { token, .. } => token,
        }
    }
}

/// Structural failure to read an input file.
///
/// Ingestion never returns this to callers of the path-based entry points; it is recorded
/// as a diagnostic and the dataset comes back empty.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// The input path does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The process may not read the input path.
    #[error("permission denied reading file: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// Any other I/O failure (including invalid UTF-8 mid-stream).
    #[error("error reading file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IngestionError {
    /// Classify an `io::Error` raised while opening or reading `path`.
    pub fn from_io(path: impl AsRef<Path>, err: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source: err },
        }
    }

    /// Path of the input that failed.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::PermissionDenied { path } | Self::Io { path, .. } => path,
        }
    }
}

/// Failure to write a report or summary file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The output file could not be created or written.
    #[error("failed to write output file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The JSON summary could not be serialized.
    #[error("failed to serialize summary for '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing to standard output failed.
    #[error("failed to write report to stdout: {0}")]
    Stdout(#[source] io::Error),
}

/// Error returned by the binaries' `run` functions.
///
/// Carries the process exit code alongside the message printed to stderr.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<IngestionError> for AppError {
    fn from(err: IngestionError) -> Self {
        Self::new(1, format!("error: {err}"))
    }
}
