//! Error types for data URI construction, parsing, and I/O.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Convenience alias for results carrying a [`DataUriError`].
pub type Result<T, E = DataUriError> = std::result::Result<T, E>;

/// Errors that can occur when building, parsing, loading, or writing a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataUriError {
    /// Input does not match the `data:` URI grammar
    InvalidArgument {
        /// The input that failed to parse
        input: String,
        /// Which part of the grammar was not satisfied
        reason: &'static str,
    },
    /// Base64 payload could not be decoded
    InvalidData {
        /// Decoder diagnostic
        reason: String,
    },
    /// Payload exceeds the active size limit under strict validation
    TooLongData {
        /// Observed payload length in bytes
        length: usize,
        /// Ceiling of the active size-limit mode
        max: usize,
    },
    /// Source file does not exist, or a URL could not be retrieved
    FileNotFound {
        /// The path or URL that was requested
        location: String,
        /// HTTP status, when a response was received
        status: Option<u16>,
    },
    /// Destination already exists and overwriting was not requested
    FileExists {
        /// The destination path
        path: PathBuf,
    },
    /// Operating-system failure while reading or writing a file
    Io {
        /// The file involved
        path: PathBuf,
        /// Kind reported by the OS
        kind: io::ErrorKind,
        /// OS diagnostic
        message: String,
    },
}

impl fmt::Display for DataUriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { input, reason } => {
                write!(f, "failed to parse data URI '{input}': {reason}")
            }
            Self::InvalidData { reason } => write!(f, "base64 decoding failed: {reason}"),
            Self::TooLongData { length, max } => {
                write!(f, "data length {length} exceeds maximum {max}")
            }
            Self::FileNotFound { location, status } => match status {
                Some(code) => write!(
                    f,
                    "'{location}' could not be retrieved; server responded with status {code}"
                ),
                None => write!(
                    f,
                    "'{location}' does not exist or the remote server does not respond"
                ),
            },
            Self::FileExists { path } => {
                write!(
                    f,
                    "file '{}' already exists; pass overwrite to replace it",
                    path.display()
                )
            }
            Self::Io {
                path,
                kind,
                message,
            } => write!(f, "I/O error on '{}' ({kind}): {message}", path.display()),
        }
    }
}

impl std::error::Error for DataUriError {}

impl DataUriError {
    /// Creates an `InvalidArgument` error.
    #[must_use]
    pub fn invalid_argument(input: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidArgument {
            input: input.into(),
            reason,
        }
    }

    /// Creates an `InvalidData` error.
    #[must_use]
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        Self::InvalidData {
            reason: reason.into(),
        }
    }

    /// Creates a `TooLongData` error.
    #[must_use]
    pub const fn too_long_data(length: usize, max: usize) -> Self {
        Self::TooLongData { length, max }
    }

    /// Creates a `FileNotFound` error.
    #[must_use]
    pub fn file_not_found(location: impl Into<String>, status: Option<u16>) -> Self {
        Self::FileNotFound {
            location: location.into(),
            status,
        }
    }

    /// Creates a `FileExists` error.
    #[must_use]
    pub fn file_exists(path: impl Into<PathBuf>) -> Self {
        Self::FileExists { path: path.into() }
    }

    /// Wraps an OS error raised while touching `path`.
    #[must_use]
    pub fn io(path: &Path, err: &io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Returns the observed payload length for `TooLongData`.
    #[must_use]
    pub const fn length(&self) -> Option<usize> {
        match self {
            Self::TooLongData { length, .. } => Some(*length),
            _ => None,
        }
    }
}

/// Failure reported by an [`HttpFetch`](crate::HttpFetch) implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    /// Transport diagnostic
    pub reason: String,
}

impl FetchError {
    /// Creates a fetch error from any displayable reason.
    #[must_use]
    pub fn new(reason: impl fmt::Display) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fetch failed: {}", self.reason)
    }
}

impl std::error::Error for FetchError {}
