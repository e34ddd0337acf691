//! `impx manifest <primary>` – load the manifest next to (or inside) the primary.

use anyhow::{Context, Result};
use impx_core::{Archive, ArchiveMode, ImportSource, OvfManifestParser};

/// Pattern used to find the descriptor inside a tape archive.
const DESCRIPTOR_PATTERN: &str = "*.ovf";

pub fn run_manifest(archive: Archive, descriptor: Option<&str>) -> Result<()> {
    let mut source = ImportSource::new(archive);
    let descriptor = match descriptor {
        Some(d) => d.to_string(),
        None => default_descriptor(&source)?,
    };

    let manifest = source
        .read_manifest(&descriptor, &OvfManifestParser)
        .with_context(|| format!("manifest for {}", descriptor))?;
    for (name, checksum) in manifest.iter() {
        println!("{}({})= {}", checksum.algorithm, name, checksum.digest);
    }
    Ok(())
}

/// The descriptor the manifest is named after: first `.ovf` entry of a tape archive, else the primary.
fn default_descriptor(source: &ImportSource) -> Result<String> {
    let archive = source.archive();
    if archive.mode() != ArchiveMode::Tape {
        return Ok(archive.path().to_string());
    }
    let entry = source
        .open(DESCRIPTOR_PATTERN)
        .with_context(|| format!("no descriptor in {}", archive.path()))?;
    let name = entry.name().to_string();
    entry.close();
    Ok(name)
}
