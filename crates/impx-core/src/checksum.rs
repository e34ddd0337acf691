//! SHA-256 of entries, for display by the CLI.
//!
//! Digests are computed on demand; nothing here compares them against a manifest.

use sha2::{Digest, Sha256};
use std::io::{self, Read};

const BUF_SIZE: usize = 64 * 1024;

/// Consume `reader` and return its SHA-256 as lowercase hex, with the number of bytes read.
pub fn sha256_reader<R: Read + ?Sized>(reader: &mut R) -> io::Result<(String, u64)> {
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; BUF_SIZE];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
        total += n as u64;
    }
    Ok((hex::encode(hasher.finalize()), total))
}
