//! Tests for cat, manifest, digest, which.

use super::{parse, parse_cli};
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_cat() {
    match parse(&["impx", "cat", "/srv/vm.ova", "*.ovf"]) {
        CliCommand::Cat { primary, entry } => {
            assert_eq!(primary, "/srv/vm.ova");
            assert_eq!(entry, "*.ovf");
        }
        _ => panic!("expected Cat"),
    }
}

#[test]
fn cli_parse_manifest() {
    match parse(&["impx", "manifest", "https://h/vm.ovf"]) {
        CliCommand::Manifest {
            primary,
            descriptor,
        } => {
            assert_eq!(primary, "https://h/vm.ovf");
            assert!(descriptor.is_none());
        }
        _ => panic!("expected Manifest"),
    }
}

#[test]
fn cli_parse_manifest_descriptor() {
    match parse(&["impx", "manifest", "vm.ova", "--descriptor", "inner/vm.ovf"]) {
        CliCommand::Manifest { descriptor, .. } => {
            assert_eq!(descriptor.as_deref(), Some("inner/vm.ovf"));
        }
        _ => panic!("expected Manifest"),
    }
}

#[test]
fn cli_parse_digest() {
    match parse(&["impx", "digest", "vm.ova", "*.vmdk"]) {
        CliCommand::Digest { primary, entry } => {
            assert_eq!(primary, "vm.ova");
            assert_eq!(entry, "*.vmdk");
        }
        _ => panic!("expected Digest"),
    }
}

#[test]
fn cli_parse_which() {
    let cli = parse_cli(&["impx", "which", "vm.ovf", "vm.mf"]);
    assert_eq!(cli.command.primary(), "vm.ovf");
}

#[test]
fn cli_cat_requires_entry() {
    assert!(Cli::try_parse_from(["impx", "cat", "vm.ova"]).is_err());
}
