//! Download transport used for remote addresses.
//!
//! The opener only depends on the [`Transport`] trait; [`CurlTransport`] is
//! the libcurl implementation. Tests substitute in-memory transports.

mod channel;
mod http;
mod head;

pub use http::CurlTransport;

use thiserror::Error;
use url::Url;

use crate::opener::Opened;

/// Failure reported by a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),

    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },

    /// The transfer thread could not be started.
    #[error("transfer worker: {0}")]
    Worker(#[source] std::io::Error),

    /// The transfer stopped without reporting a result.
    #[error("transfer interrupted")]
    Interrupted,
}

/// Fetches a URL as a stream. Implementations must not retry.
pub trait Transport: Send + Sync {
    fn download(&self, url: &Url) -> Result<Opened, TransportError>;
}
