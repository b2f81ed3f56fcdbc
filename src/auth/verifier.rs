//! Credential verification
//!
//! Scans the credentials file record by record and compares the candidate
//! password digest with the first record whose username matches.
//!
//! Comparisons are plain byte-by-byte and exit on the first mismatch, so
//! timing depends on how much of the digest matches.

use log::{debug, error, warn};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use super::digest::{DIGEST_HEX_LEN, digest_hex};
use super::format::read_line;
use super::results::AuthResult;
use crate::config::GateConfig;

/// Read-only checker over the credentials file
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    path: PathBuf,
}

impl CredentialVerifier {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &GateConfig) -> Self {
        Self::new(config.credentials_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks a candidate pair against the first record with the same username.
    pub fn authenticate(&self, username: &[u8], password: &[u8]) -> AuthResult {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) => {
                warn!(
                    "Could not open credentials file {} for reading: {}",
                    self.path.display(),
                    e
                );
                return AuthResult::StoreMissing;
            }
        };

        let mut reader = BufReader::new(file);
        let stored_digest = match find_digest(&mut reader, username) {
            Ok(Lookup::Found(digest)) => digest,
            Ok(Lookup::NotFound) => {
                debug!("User {} not found", String::from_utf8_lossy(username));
                return AuthResult::Denied;
            }
            Ok(Lookup::MissingDigest) => {
                warn!(
                    "User {} has no digest line in {}",
                    String::from_utf8_lossy(username),
                    self.path.display()
                );
                return AuthResult::Malformed;
            }
            Err(e) => {
                error!(
                    "Failed reading credentials file {}: {}",
                    self.path.display(),
                    e
                );
                return AuthResult::Malformed;
            }
        };

        if stored_digest.len() != DIGEST_HEX_LEN {
            warn!(
                "Stored digest for {} is {} characters, expected {}",
                String::from_utf8_lossy(username),
                stored_digest.len(),
                DIGEST_HEX_LEN
            );
            return AuthResult::Denied;
        }

        if bytes_match(digest_hex(password).as_bytes(), &stored_digest) {
            AuthResult::Granted
        } else {
            AuthResult::Denied
        }
    }
}

enum Lookup {
    Found(Vec<u8>),
    NotFound,
    MissingDigest,
}

/// Walks username/digest pairs and returns the digest line of the first match.
fn find_digest<R: io::BufRead>(reader: &mut R, username: &[u8]) -> io::Result<Lookup> {
    let mut line = Vec::new();

    loop {
        let matched = match read_line(reader, &mut line)? {
            Some(candidate) => bytes_match(candidate, username),
            None => return Ok(Lookup::NotFound),
        };

        // The digest line must be read even when skipping a record
        let digest = read_line(reader, &mut line);
        if !matched {
            match digest? {
                Some(_) => continue,
                None => return Ok(Lookup::NotFound),
            }
        }

        return match digest {
            Ok(Some(digest)) => Ok(Lookup::Found(digest.to_vec())),
            Ok(None) | Err(_) => Ok(Lookup::MissingDigest),
        };
    }
}

/// Length check first, then byte-by-byte stopping at the first difference.
fn bytes_match(stored: &[u8], candidate: &[u8]) -> bool {
    if stored.len() != candidate.len() {
        return false;
    }
    for (a, b) in stored.iter().zip(candidate) {
        if a != b {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lookup(contents: &[u8], username: &[u8]) -> Lookup {
        find_digest(&mut Cursor::new(contents.to_vec()), username).unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        match lookup(b"alice\nfirst\nalice\nsecond\n", b"alice") {
            Lookup::Found(digest) => assert_eq!(digest, b"first"),
            _ => panic!("expected first record"),
        }
    }

    #[test]
    fn test_prefix_username_does_not_match() {
        assert!(matches!(
            lookup(b"alice\nd1\nalic\nd2\n", b"alic"),
            Lookup::Found(ref d) if d == b"d2"
        ));
        assert!(matches!(lookup(b"alice\nd1\n", b"alicex"), Lookup::NotFound));
    }

    #[test]
    fn test_digest_lines_are_not_usernames() {
        assert!(matches!(lookup(b"alice\nbob\n", b"bob"), Lookup::NotFound));
    }

    #[test]
    fn test_truncated_record() {
        assert!(matches!(lookup(b"alice\n", b"alice"), Lookup::MissingDigest));
        assert!(matches!(lookup(b"alice\n", b"bob"), Lookup::NotFound));
    }

    #[test]
    fn test_empty_store_is_not_found() {
        assert!(matches!(lookup(b"", b"alice"), Lookup::NotFound));
    }

    #[test]
    fn test_bytes_match() {
        assert!(bytes_match(b"abc", b"abc"));
        assert!(!bytes_match(b"abc", b"abd"));
        assert!(!bytes_match(b"abc", b"abcd"));
    }
}
