//! CLI for impx.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use impx_core::config::{self, ImpxConfig};
use impx_core::{Archive, ArchiveMode, Opener};

use commands::{run_cat, run_digest, run_manifest, run_which};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "impx")]
#[command(about = "impx: read entries from OVA archives, OVF directories and remote exports", long_about = None)]
pub struct Cli {
    /// How entries are located: tape (tar archive), flat (sibling files) or auto (by extension).
    #[arg(long, global = true, value_enum)]
    pub mode: Option<ModeArg>,

    /// Refuse http/https addresses even if the config allows them.
    #[arg(long, global = true)]
    pub no_remote: bool,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Auto,
    Tape,
    Flat,
}

impl From<ModeArg> for ArchiveMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Auto => ArchiveMode::Auto,
            ModeArg::Tape => ArchiveMode::Tape,
            ModeArg::Flat => ArchiveMode::Flat,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Write an entry's content to stdout.
    Cat {
        /// Archive, descriptor path or http(s) URL.
        primary: String,
        /// Entry name (a glob on base names for tape archives).
        entry: String,
    },

    /// Load and print the manifest that belongs to the descriptor.
    Manifest {
        /// Archive, descriptor path or http(s) URL.
        primary: String,
        /// Descriptor the manifest is named after (default: first *.ovf entry, or the primary).
        #[arg(long)]
        descriptor: Option<String>,
    },

    /// Compute SHA-256 of an entry.
    Digest {
        /// Archive, descriptor path or http(s) URL.
        primary: String,
        /// Entry name (a glob on base names for tape archives).
        entry: String,
    },

    /// Show the name and declared length an entry resolves to.
    Which {
        /// Archive, descriptor path or http(s) URL.
        primary: String,
        /// Entry name (a glob on base names for tape archives).
        entry: String,
    },
}

impl CliCommand {
    fn primary(&self) -> &str {
        match self {
            CliCommand::Cat { primary, .. }
            | CliCommand::Manifest { primary, .. }
            | CliCommand::Digest { primary, .. }
            | CliCommand::Which { primary, .. } => primary,
        }
    }
}

impl Cli {
    /// Builds the archive for this invocation: command-line flags override the config.
    pub fn archive(&self, cfg: &ImpxConfig) -> Archive {
        let mut cfg = cfg.clone();
        if self.no_remote {
            cfg.remote = false;
        }
        let mode = self.mode.map(ArchiveMode::from).unwrap_or(cfg.mode);
        Archive::new(mode, self.command.primary(), Opener::from_config(&cfg))
    }

    pub fn run(self) -> Result<()> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let archive = self.archive(&cfg);

        match self.command {
            CliCommand::Cat { entry, .. } => run_cat(&archive, &entry)?,
            CliCommand::Manifest { descriptor, .. } => {
                run_manifest(archive, descriptor.as_deref())?
            }
            CliCommand::Digest { entry, .. } => run_digest(&archive, &entry)?,
            CliCommand::Which { entry, .. } => run_which(&archive, &entry)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
