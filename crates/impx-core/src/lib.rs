pub mod config;
pub mod logging;

pub mod address;
pub mod archive;
pub mod checksum;
pub mod entry;
pub mod error;
pub mod manifest;
pub mod opener;
pub mod source;
pub mod transport;

pub use archive::{Archive, ArchiveMode, FlatArchive, TapeArchive};
pub use entry::Entry;
pub use error::{ResolveError, Result};
pub use manifest::{Checksum, Manifest, ManifestParser, OvfManifestParser};
pub use opener::{Opened, Opener};
pub use source::ImportSource;
pub use transport::{CurlTransport, Transport, TransportError};
