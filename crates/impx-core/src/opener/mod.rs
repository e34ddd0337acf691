//! Local/remote dispatch: turn an address into a readable stream and its declared length.
//!
//! Remote addresses go to the configured [`Transport`]; everything else is
//! opened from the host filesystem after canonicalization. Nothing here
//! retries; failures reach the caller as they happened.

mod local;

use std::fmt;
use std::io::Read;
use std::sync::Arc;

use crate::address;
use crate::config::ImpxConfig;
use crate::error::{ResolveError, Result};
use crate::transport::{CurlTransport, Transport, TransportError};

/// Owned byte stream handed out by the opener.
pub type Stream = Box<dyn Read + Send>;

/// An opened address: the stream plus the length its source declared.
pub struct Opened {
    pub stream: Stream,
    /// Total size in bytes; `None` when a remote source did not report one.
    pub length: Option<u64>,
}

impl Opened {
    pub fn new(stream: Stream, length: Option<u64>) -> Self {
        Self { stream, length }
    }
}

impl fmt::Debug for Opened {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opened")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

/// Opens addresses. Cheap to clone; the transport is shared.
#[derive(Clone, Default)]
pub struct Opener {
    transport: Option<Arc<dyn Transport>>,
}

impl fmt::Debug for Opener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opener")
            .field("remote", &self.transport.is_some())
            .finish()
    }
}

impl Opener {
    /// Opener without a transport: remote addresses fail with `Unsupported`.
    pub fn local_only() -> Self {
        Self::default()
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport: Some(transport),
        }
    }

    /// Builds the opener described by the config: curl transport when remote access is enabled.
    pub fn from_config(cfg: &ImpxConfig) -> Self {
        if cfg.remote {
            Self::with_transport(Arc::new(CurlTransport::new(cfg.transport.clone())))
        } else {
            Self::local_only()
        }
    }

    pub fn has_transport(&self) -> bool {
        self.transport.is_some()
    }

    /// Opens `address`, dispatching on its scheme.
    pub fn open(&self, address: &str) -> Result<Opened> {
        let remote = address::is_remote(address);
        tracing::debug!(address, remote, "open");
        if remote {
            self.open_remote(address)
        } else {
            self.open_local(address)
        }
    }

    /// Opens a host filesystem path. The path is canonicalized first.
    pub fn open_local(&self, path: &str) -> Result<Opened> {
        local::open(path)
    }

    /// Opens an `http`/`https` URL through the configured transport.
    pub fn open_remote(&self, link: &str) -> Result<Opened> {
        let Some(transport) = &self.transport else {
            return Err(ResolveError::Unsupported(link.to_string()));
        };
        let url = url::Url::parse(link).map_err(|e| {
            ResolveError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid URL {}: {}", link, e),
            ))
        })?;
        let opened = transport.download(&url).map_err(|err| match err {
            TransportError::Http {
                status: 404 | 410, ..
            } => ResolveError::NotFound {
                name: link.to_string(),
            },
            other => ResolveError::Transport(other),
        })?;
        tracing::debug!(url = %url, length = ?opened.length, "remote stream opened");
        Ok(opened)
    }
}
