//! `impx cat <primary> <entry>` – stream an entry to stdout.

use anyhow::{Context, Result};
use impx_core::Archive;
use std::io::{self, Write};

pub fn run_cat(archive: &Archive, entry: &str) -> Result<()> {
    let mut entry = archive
        .open(entry)
        .with_context(|| format!("open {} in {}", entry, archive.path()))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let copied = io::copy(&mut entry, &mut out).with_context(|| format!("read {}", entry.name()))?;
    out.flush()?;
    tracing::debug!(entry = %entry.name(), bytes = copied, "cat done");
    entry.close();
    Ok(())
}
