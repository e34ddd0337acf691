//! Logging init: append to a file under the XDG state dir, falling back to stderr.
//!
//! Library code only emits `tracing` events; binaries call [`init`] once.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,impx_core=debug,impx=debug";

/// Where log output ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

/// Log file shared by every event writer.
struct SharedFile(Arc<fs::File>);

impl io::Write for SharedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut &*self.0, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::Write::flush(&mut &*self.0)
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Path of the log file: `~/.local/state/impx/impx.log`.
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("impx")?;
    Ok(xdg_dirs.get_state_home().join("impx.log"))
}

fn open_log(path: &Path) -> io::Result<fs::File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize the global subscriber. Never fails: an unwritable state dir means stderr.
///
/// `verbose` forces the `debug` level regardless of `RUST_LOG`.
pub fn init(verbose: bool) -> LogSink {
    let file = log_path().and_then(|path| Ok((open_log(&path)?, path)));

    match file {
        Ok((file, path)) => {
            let file = Arc::new(file);
            let writer = BoxMakeWriter::new(move || SharedFile(Arc::clone(&file)));
            let installed = tracing_subscriber::fmt()
                .with_env_filter(env_filter(verbose))
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .is_ok();
            if installed {
                tracing::info!("impx logging initialized at {}", path.display());
            }
            LogSink::File(path)
        }
        Err(_) => {
            init_stderr(verbose);
            LogSink::Stderr
        }
    }
}

/// Initialize logging to stderr only (no file).
pub fn init_stderr(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
