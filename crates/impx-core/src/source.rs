//! An archive together with the manifest loaded for the current import.

use crate::archive::Archive;
use crate::entry::Entry;
use crate::error::Result;
use crate::manifest::{self, Checksum, Manifest, ManifestParser};

/// Per-import view of a primary location.
#[derive(Debug)]
pub struct ImportSource {
    archive: Archive,
    manifest: Option<Manifest>,
}

impl ImportSource {
    pub fn new(archive: Archive) -> Self {
        Self {
            archive,
            manifest: None,
        }
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    pub fn open(&self, name: &str) -> Result<Entry> {
        self.archive.open(name)
    }

    /// Reads a whole entry, typically the OVF descriptor, and releases it.
    pub fn read_descriptor(&self, name: &str) -> Result<Vec<u8>> {
        let entry = self.archive.open(name)?;
        Ok(entry.read_to_vec()?)
    }

    /// Loads the manifest belonging to `descriptor` and keeps it for lookups.
    pub fn read_manifest(
        &mut self,
        descriptor: &str,
        parser: &dyn ManifestParser,
    ) -> Result<&Manifest> {
        let loaded = manifest::load_manifest(&self.archive, descriptor, parser)?;
        Ok(self.manifest.insert(loaded))
    }

    pub fn manifest(&self) -> Option<&Manifest> {
        self.manifest.as_ref()
    }

    /// Expected checksum for `name`, if a manifest is loaded and lists it.
    pub fn checksum_for(&self, name: &str) -> Option<&Checksum> {
        self.manifest.as_ref()?.get(name)
    }
}
