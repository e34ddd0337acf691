//! Entry resolution behind one interface: tape archive or sibling files.
//!
//! The variant is fixed when the [`Archive`] is built, from an explicit
//! [`ArchiveMode`] or, in `Auto` mode, from the primary's extension.

mod flat;
mod tape;

pub use crate::config::ArchiveMode;
pub use flat::FlatArchive;
pub use tape::TapeArchive;

use crate::address;
use crate::entry::Entry;
use crate::error::Result;
use crate::opener::Opener;

/// Extension that marks a primary as a tape archive in `Auto` mode.
pub const TAPE_EXTENSION: &str = ".ova";

impl ArchiveMode {
    /// Concrete mode for `primary`; never returns `Auto`.
    pub fn resolve(self, primary: &str) -> ArchiveMode {
        match self {
            ArchiveMode::Auto => match address::extension(primary) {
                Some(ext) if ext.eq_ignore_ascii_case(TAPE_EXTENSION) => ArchiveMode::Tape,
                _ => ArchiveMode::Flat,
            },
            other => other,
        }
    }
}

/// A primary location plus the way entries are found relative to it.
#[derive(Debug, Clone)]
pub enum Archive {
    Tape(TapeArchive),
    Flat(FlatArchive),
}

impl Archive {
    pub fn new(mode: ArchiveMode, path: impl Into<String>, opener: Opener) -> Self {
        let path = path.into();
        match mode.resolve(&path) {
            ArchiveMode::Tape => Archive::Tape(TapeArchive::new(path, opener)),
            _ => Archive::Flat(FlatArchive::new(path, opener)),
        }
    }

    /// The primary location.
    pub fn path(&self) -> &str {
        match self {
            Archive::Tape(t) => t.path(),
            Archive::Flat(f) => f.path(),
        }
    }

    pub fn mode(&self) -> ArchiveMode {
        match self {
            Archive::Tape(_) => ArchiveMode::Tape,
            Archive::Flat(_) => ArchiveMode::Flat,
        }
    }

    /// Opens an entry: a base-name glob for tape archives, a sibling name for flat ones.
    pub fn open(&self, name: &str) -> Result<Entry> {
        match self {
            Archive::Tape(t) => t.open(name),
            Archive::Flat(f) => f.open(name),
        }
    }
}
