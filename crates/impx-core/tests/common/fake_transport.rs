//! In-memory transport that counts opened and released streams.

use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use impx_core::{Opened, Transport, TransportError};

#[derive(Debug, Default)]
pub struct Counters {
    pub opened: AtomicUsize,
    pub closed: AtomicUsize,
}

impl Counters {
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    /// True when every stream handed out has been released.
    pub fn balanced(&self) -> bool {
        self.opened() == self.closed()
    }
}

/// Stream that bumps `closed` when dropped and can fail after `fail_after` bytes.
struct TrackedStream {
    body: Cursor<Vec<u8>>,
    fail_after: Option<u64>,
    counters: Arc<Counters>,
}

impl Read for TrackedStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if let Some(limit) = self.fail_after {
            if self.body.position() >= limit {
                return Err(io::Error::new(
                    io::ErrorKind::ConnectionReset,
                    "connection reset by peer",
                ));
            }
            let room = (limit - self.body.position()) as usize;
            let n = buf.len().min(room);
            return self.body.read(&mut buf[..n]);
        }
        self.body.read(buf)
    }
}

impl Drop for TrackedStream {
    fn drop(&mut self) {
        self.counters.closed.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
struct Resource {
    body: Vec<u8>,
    declare_length: bool,
    fail_after: Option<u64>,
}

/// Serves registered URLs; anything else is a 404.
#[derive(Debug, Default)]
pub struct FakeTransport {
    resources: HashMap<String, Resource>,
    pub counters: Arc<Counters>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(mut self, url: &str, body: Vec<u8>) -> Self {
        self.resources.insert(
            url.to_string(),
            Resource {
                body,
                declare_length: true,
                fail_after: None,
            },
        );
        self
    }

    /// Like `serve` but without a declared length.
    pub fn serve_unsized(mut self, url: &str, body: Vec<u8>) -> Self {
        self.resources.insert(
            url.to_string(),
            Resource {
                body,
                declare_length: false,
                fail_after: None,
            },
        );
        self
    }

    /// Serves `body` but fails reads once `fail_after` bytes were delivered.
    pub fn serve_failing(mut self, url: &str, body: Vec<u8>, fail_after: u64) -> Self {
        self.resources.insert(
            url.to_string(),
            Resource {
                body,
                declare_length: true,
                fail_after: Some(fail_after),
            },
        );
        self
    }
}

impl Transport for FakeTransport {
    fn download(&self, url: &url::Url) -> Result<Opened, TransportError> {
        let Some(resource) = self.resources.get(url.as_str()) else {
            return Err(TransportError::Http {
                url: url.to_string(),
                status: 404,
            });
        };
        self.counters.opened.fetch_add(1, Ordering::SeqCst);
        let length = resource
            .declare_length
            .then_some(resource.body.len() as u64);
        let stream = TrackedStream {
            body: Cursor::new(resource.body.clone()),
            fail_after: resource.fail_after,
            counters: Arc::clone(&self.counters),
        };
        Ok(Opened::new(Box::new(stream), length))
    }
}
