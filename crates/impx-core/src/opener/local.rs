//! Host filesystem opens.

use std::fs::{self, File};

use crate::error::{ResolveError, Result};

use super::Opened;

/// Canonicalizes `path` (symlinks, `.` and `..`) and opens it read-only.
pub(super) fn open(path: &str) -> Result<Opened> {
    let canonical = fs::canonicalize(path).map_err(|e| ResolveError::from_open(path, e))?;
    let file = File::open(&canonical).map_err(|e| ResolveError::from_open(path, e))?;
    let length = file.metadata()?.len();
    tracing::trace!(path, canonical = %canonical.display(), length, "opened local file");
    Ok(Opened::new(Box::new(file), Some(length)))
}
