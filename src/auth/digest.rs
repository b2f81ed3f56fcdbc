//! Password digest
//!
//! Unsalted single-round SHA-1, encoded as lowercase hex. Both registration
//! and verification go through [`digest_hex`] so the two always agree.

use sha1::{Digest, Sha1};

/// Digest output size in bytes
pub const DIGEST_LEN: usize = 20;

/// Length of the hex-encoded digest as stored on disk
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

/// Hashes a password and returns the lowercase hex encoding.
pub fn digest_hex(password: &[u8]) -> String {
    let digest = Sha1::digest(password);
    hex::encode(digest)
}
