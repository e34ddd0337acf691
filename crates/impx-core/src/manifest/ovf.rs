//! OVF manifest text format: one `ALGO(file name)= hexdigest` line per file.

use std::io::{BufRead, BufReader, Read};

use super::{Checksum, Manifest, ManifestError, ManifestParser};

#[derive(Debug, Clone, Copy, Default)]
pub struct OvfManifestParser;

impl ManifestParser for OvfManifestParser {
    fn parse(&self, reader: &mut dyn Read) -> Result<Manifest, ManifestError> {
        let mut entries = Vec::new();
        for (index, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            let parsed = parse_line(text).ok_or_else(|| ManifestError::Malformed {
                line: index + 1,
                text: text.to_string(),
            })?;
            entries.push(parsed);
        }
        Ok(entries.into_iter().collect())
    }
}

/// Splits `SHA256(disk1.vmdk)= abcd` into the name and its checksum.
fn parse_line(text: &str) -> Option<(String, Checksum)> {
    let (left, digest) = text.rsplit_once('=')?;
    let left = left.trim_end();
    let open = left.find('(')?;
    let name = left[open + 1..].strip_suffix(')')?;
    let algorithm = left[..open].trim();
    let digest = digest.trim();

    if algorithm.is_empty() || !algorithm.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return None;
    }
    if name.is_empty() || digest.is_empty() || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some((
        name.to_string(),
        Checksum {
            algorithm: algorithm.to_ascii_uppercase(),
            digest: digest.to_ascii_lowercase(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<Manifest, ManifestError> {
        OvfManifestParser.parse(&mut Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn parses_entries() {
        let m = parse(
            "SHA256(vm.ovf)= 3a6eb0790f39ac87c94f3856b2dd2c5d110e6811602261a9a923d3bb23adc8b7\n\
             SHA1(vm-disk1.vmdk)=DA39A3EE5E6B4B0D3255BFEF95601890AFD80709\n",
        )
        .unwrap();
        assert_eq!(m.len(), 2);
        let ovf = m.get("vm.ovf").unwrap();
        assert_eq!(ovf.algorithm, "SHA256");
        assert!(ovf.digest.starts_with("3a6eb079"));
        let disk = m.get("vm-disk1.vmdk").unwrap();
        assert_eq!(disk.algorithm, "SHA1");
        assert_eq!(disk.digest, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(disk.to_string(), "SHA1:da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn tolerates_blank_lines_and_spacing() {
        let m = parse("\r\n  sha256(a b.iso) = ABCDEF \r\n\n").unwrap();
        assert_eq!(m.get("a b.iso").unwrap().digest, "abcdef");
        assert_eq!(m.get("a b.iso").unwrap().algorithm, "SHA256");
    }

    #[test]
    fn name_with_parentheses() {
        let m = parse("SHA256(disk (1).vmdk)= 00ff\n").unwrap();
        assert!(m.get("disk (1).vmdk").is_some());
    }

    #[test]
    fn last_duplicate_wins() {
        let m = parse("SHA256(a)= 01\nSHA256(a)= 02\n").unwrap();
        assert_eq!(m.len(), 1);
        assert_eq!(m.get("a").unwrap().digest, "02");
    }

    #[test]
    fn empty_stream_is_empty_manifest() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn malformed_line_reports_position() {
        let err = parse("SHA256(a)= 01\nnot a manifest line\n").unwrap_err();
        match err {
            ManifestError::Malformed { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "not a manifest line");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn non_hex_digest_rejected() {
        assert!(parse("SHA256(a)= xyz\n").is_err());
        assert!(parse("(a)= 00\n").is_err());
        assert!(parse("SHA256()= 00\n").is_err());
    }
}
