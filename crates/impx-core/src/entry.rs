//! Caller-owned handle for one resolved entry.

use std::fmt;
use std::io::{self, Read};

use crate::opener::Stream;

/// An open entry: its stream, declared length and the name it was found under.
///
/// The handle owns everything needed to read the entry, including the
/// archive stream a tape entry was cut from. Releasing the handle, with
/// [`Entry::close`] or by dropping it, closes that stream exactly once.
pub struct Entry {
    name: String,
    length: Option<u64>,
    reader: Stream,
}

impl Entry {
    pub(crate) fn new(name: String, length: Option<u64>, reader: Stream) -> Self {
        Self {
            name,
            length,
            reader,
        }
    }

    /// Name as found: the full archive path for tape entries, the resolved address otherwise.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared size in bytes, if the source reported one.
    pub fn length(&self) -> Option<u64> {
        self.length
    }

    /// Releases the entry and its underlying stream.
    pub fn close(self) {
        tracing::trace!(entry = %self.name, "entry released");
    }

    /// Reads the remaining content and releases the entry.
    pub fn read_to_vec(mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.length.unwrap_or(0).min(1 << 20) as usize);
        self.reader.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

impl Read for Entry {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}
