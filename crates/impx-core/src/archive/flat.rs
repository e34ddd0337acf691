//! Entries stored as files next to the primary descriptor.

use crate::address;
use crate::entry::Entry;
use crate::error::Result;
use crate::opener::Opener;

#[derive(Debug, Clone)]
pub struct FlatArchive {
    path: String,
    opener: Opener,
}

impl FlatArchive {
    pub fn new(path: impl Into<String>, opener: Opener) -> Self {
        Self {
            path: path.into(),
            opener,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Address `name` resolves to: the primary itself, or a sibling of it.
    pub fn address_of(&self, name: &str) -> String {
        address::sibling(&self.path, name)
    }

    /// Opens the sibling `name`. Existence is left to the opener.
    pub fn open(&self, name: &str) -> Result<Entry> {
        let address = self.address_of(name);
        let opened = self.opener.open(&address)?;
        Ok(Entry::new(address, opened.length, opened.stream))
    }
}
