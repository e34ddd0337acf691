//! `impx which <primary> <entry>` – show which entry a name or pattern resolves to, with its length.

use anyhow::{Context, Result};
use impx_core::Archive;

pub fn run_which(archive: &Archive, entry: &str) -> Result<()> {
    let found = archive
        .open(entry)
        .with_context(|| format!("open {} in {}", entry, archive.path()))?;
    match found.length() {
        Some(len) => println!("{}\t{}", found.name(), len),
        None => println!("{}\t-", found.name()),
    }
    found.close();
    Ok(())
}
