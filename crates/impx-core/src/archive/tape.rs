//! Entries inside a tar archive, found by a single forward scan.
//!
//! Tar has no index, so the scan reads headers in archive order and the
//! first entry whose base name matches the glob wins. The returned handle
//! reads straight from the archive stream, bounded to the entry's size.

use std::io::{self, Read};

use glob::Pattern;

use crate::address;
use crate::entry::Entry;
use crate::error::{ResolveError, Result};
use crate::opener::Opener;

#[derive(Debug, Clone)]
pub struct TapeArchive {
    path: String,
    opener: Opener,
}

/// Header of the matching entry, as seen during the scan.
#[derive(Debug)]
struct Found {
    name: String,
    size: u64,
}

impl TapeArchive {
    pub fn new(path: impl Into<String>, opener: Opener) -> Self {
        Self {
            path: path.into(),
            opener,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Opens the first entry whose base name matches `pattern`.
    ///
    /// The pattern is compiled before the archive is opened; a malformed
    /// pattern fails without touching the primary.
    pub fn open(&self, pattern: &str) -> Result<Entry> {
        let matcher =
            Pattern::new(&collapse_stars(pattern)).map_err(|source| ResolveError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;

        let opened = self.opener.open(&self.path)?;
        let mut archive = tar::Archive::new(opened.stream);

        // On error the archive, and with it the stream, is dropped here.
        let found = scan(&mut archive, &matcher)
            .map_err(|e| ResolveError::from_scan(&self.path, e))?;

        match found {
            Some(found) => {
                tracing::debug!(
                    archive = %self.path,
                    pattern,
                    entry = %found.name,
                    size = found.size,
                    "matched tape entry"
                );
                // The tar reader has consumed the header only; the stream sits at the entry's data.
                let stream = archive.into_inner();
                Ok(Entry::new(
                    found.name,
                    Some(found.size),
                    Box::new(EntryData::new(stream, found.size)),
                ))
            }
            None => {
                drop(archive);
                tracing::debug!(archive = %self.path, pattern, "no tape entry matched");
                Err(ResolveError::NotFound {
                    name: pattern.to_string(),
                })
            }
        }
    }
}

/// Reader over an entry's data that refuses to end before the declared size.
struct EntryData<R> {
    inner: R,
    remaining: u64,
}

impl<R: Read> EntryData<R> {
    fn new(inner: R, size: u64) -> Self {
        Self {
            inner,
            remaining: size,
        }
    }
}

impl<R: Read> Read for EntryData<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 || buf.is_empty() {
            return Ok(0);
        }
        let want = buf.len().min(usize::try_from(self.remaining).unwrap_or(usize::MAX));
        let n = self.inner.read(&mut buf[..want])?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("archive ended {} bytes before the end of the entry", self.remaining),
            ));
        }
        self.remaining -= n as u64;
        Ok(n)
    }
}

/// Runs of `*` mean the same as one `*` against a base name.
fn collapse_stars(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if c == '*' && out.ends_with('*') {
            continue;
        }
        out.push(c);
    }
    out
}

fn scan<R: Read>(archive: &mut tar::Archive<R>, matcher: &Pattern) -> io::Result<Option<Found>> {
    for entry in archive.entries()? {
        let entry = entry?;
        let name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
        if !matcher.matches(address::base_name(&name)) {
            continue;
        }
        if entry.header().entry_type().is_gnu_sparse() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{}: sparse entries are not supported", name),
            ));
        }
        return Ok(Some(Found {
            name,
            size: entry.size(),
        }));
    }
    Ok(None)
}
