//! CLI command handlers, one per file.

mod cat;
mod digest;
mod manifest;
mod which;

pub use cat::run_cat;
pub use digest::run_digest;
pub use manifest::run_manifest;
pub use which::run_which;
