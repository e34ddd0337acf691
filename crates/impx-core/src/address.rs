//! Address model: classification and name derivation for primary locations.
//!
//! Addresses are plain strings. Anything starting with `http://` or `https://`
//! is remote; every other string is a host filesystem path. All derivations
//! use `/` as the separator so they apply to URLs and local paths alike.

/// Schemes dispatched to the remote transport.
pub const REMOTE_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Extension given to the manifest that sits next to a descriptor.
pub const MANIFEST_EXTENSION: &str = ".mf";

/// Returns true if `address` must be fetched through the transport.
pub fn is_remote(address: &str) -> bool {
    REMOTE_SCHEMES
        .iter()
        .any(|scheme| address.starts_with(scheme))
}

/// Resolves `name` next to `primary`.
///
/// The directory part of `primary` (everything up to and including the last
/// `/`) is prefixed to `name`. A `primary` without a separator yields `name`
/// unchanged, as does asking for the primary itself.
pub fn sibling(primary: &str, name: &str) -> String {
    if name == primary {
        return name.to_string();
    }
    match primary.rfind('/') {
        Some(index) => format!("{}{}", &primary[..=index], name),
        None => name.to_string(),
    }
}

/// Last element of a `/`-separated name, ignoring trailing separators.
///
/// `"a/b/disk.vmdk"` gives `"disk.vmdk"`, `"dir/"` gives `"dir"`, an empty
/// name gives `"."` and a name made only of separators gives `"/"`.
pub fn base_name(name: &str) -> &str {
    if name.is_empty() {
        return ".";
    }
    let trimmed = name.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind('/') {
        Some(index) => &trimmed[index + 1..],
        None => trimmed,
    }
}

/// Extension of the base name including the dot, if any.
pub fn extension(name: &str) -> Option<&str> {
    let base = base_name(name);
    base.rfind('.').map(|index| &base[index..])
}

/// Logical manifest name for a descriptor or archive: `disk.ova` → `disk.mf`.
///
/// Only the last extension is replaced; a name without one gets `.mf` appended.
pub fn manifest_name(primary: &str) -> String {
    let base = base_name(primary);
    let stem = match base.rfind('.') {
        Some(index) => &base[..index],
        None => base,
    };
    format!("{}{}", stem, MANIFEST_EXTENSION)
}
