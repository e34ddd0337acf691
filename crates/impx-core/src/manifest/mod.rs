//! Manifest loading: locate `<descriptor>.mf`, parse it, surface any failure.
//!
//! Parsing is pluggable through [`ManifestParser`]; [`OvfManifestParser`]
//! reads the usual `ALGO(name)= digest` text format. A manifest that cannot
//! be opened is an error, never an empty manifest.

mod ovf;

pub use ovf::OvfManifestParser;

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Read};

use thiserror::Error;

use crate::address;
use crate::archive::Archive;
use crate::error::Result;

/// Expected digest of one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum {
    /// Upper-case algorithm name, e.g. `SHA256`.
    pub algorithm: String,
    /// Lower-case hex digest.
    pub digest: String,
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.digest)
    }
}

/// Entry name to expected checksum. Built once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<String, Checksum>,
}

impl Manifest {
    pub fn get(&self, name: &str) -> Option<&Checksum> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Checksum)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Checksum)> for Manifest {
    fn from_iter<I: IntoIterator<Item = (String, Checksum)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("read manifest: {0}")]
    Io(#[from] io::Error),

    #[error("manifest line {line}: malformed entry {text:?}")]
    Malformed { line: usize, text: String },
}

/// Turns a manifest stream into a [`Manifest`].
pub trait ManifestParser {
    fn parse(&self, reader: &mut dyn Read) -> std::result::Result<Manifest, ManifestError>;
}

/// Loads the manifest that belongs to `descriptor` through `archive`.
///
/// The manifest name is the descriptor's base name with its extension
/// replaced by `.mf`; it is resolved by whichever variant `archive` is.
/// Open and parse failures are logged for operators and returned.
pub fn load_manifest(
    archive: &Archive,
    descriptor: &str,
    parser: &dyn ManifestParser,
) -> Result<Manifest> {
    let name = address::manifest_name(descriptor);

    let mut entry = archive.open(&name).map_err(|err| {
        tracing::error!("manifest {:?}: {}", name, err);
        err
    })?;
    let parsed = parser.parse(&mut entry);
    entry.close();

    let manifest = parsed.map_err(|err| {
        tracing::error!("manifest {:?}: {}", name, err);
        err
    })?;
    tracing::debug!(manifest = %name, entries = manifest.len(), "manifest loaded");
    Ok(manifest)
}
