use clap::Parser;
use impx_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible.
    if let logging::LogSink::File(path) = logging::init(cli.verbose) {
        tracing::debug!("logging to {}", path.display());
    }

    if let Err(err) = cli.run() {
        eprintln!("impx error: {:#}", err);
        std::process::exit(1);
    }
}
