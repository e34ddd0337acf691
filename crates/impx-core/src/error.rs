//! Error taxonomy shared by the opener, both archive variants and the manifest loader.

use std::io;

use thiserror::Error;

use crate::manifest::ManifestError;
use crate::transport::TransportError;

pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// The address does not exist, or a tape archive was scanned to the end without a match.
    #[error("{name}: not found")]
    NotFound { name: String },

    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Remote address requested without a configured transport.
    #[error("{0}: remote path not supported")]
    Unsupported(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corrupt or unsupported tar framing.
    #[error("archive {name}: {source}")]
    Archive {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

impl ResolveError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }

    /// Maps an open failure on `name` so a missing file reads as `NotFound`.
    pub(crate) fn from_open(name: &str, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            ResolveError::NotFound {
                name: name.to_string(),
            }
        } else {
            ResolveError::Io(err)
        }
    }

    /// Maps an error raised by the tar reader while scanning `name`.
    ///
    /// The tar reader reports bad headers and short blocks as `Other`,
    /// `InvalidData` or `UnexpectedEof`; anything else came from the
    /// underlying stream.
    pub(crate) fn from_scan(name: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::Other | io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => {
                ResolveError::Archive {
                    name: name.to_string(),
                    source: err,
                }
            }
            _ => ResolveError::Io(err),
        }
    }
}
