//! Digest command: SHA-256 of an entry, printed like `sha256sum`.

use anyhow::{Context, Result};
use impx_core::{checksum, Archive};

pub fn run_digest(archive: &Archive, entry: &str) -> Result<()> {
    let mut entry = archive
        .open(entry)
        .with_context(|| format!("open {} in {}", entry, archive.path()))?;
    let (digest, bytes) =
        checksum::sha256_reader(&mut entry).with_context(|| format!("read {}", entry.name()))?;
    if let Some(declared) = entry.length() {
        if declared != bytes {
            tracing::warn!(entry = %entry.name(), declared, bytes, "entry length differs from declared size");
        }
    }
    println!("{}  {}", digest, entry.name());
    Ok(())
}
