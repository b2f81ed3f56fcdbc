//! Authentication result types
//!
//! Defines the outcome returned by credential verification.

use std::fmt;

/// Result of checking a username/password pair against the credentials file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthResult {
    /// First record with this username carries the candidate's digest
    Granted,
    /// Unknown username, digest mismatch, or a stored digest of the wrong length
    Denied,
    /// The credentials file could not be opened; register a user first
    StoreMissing,
    /// A matching username line has no readable digest line after it
    Malformed,
}

impl AuthResult {
    /// Only `Granted` counts as a successful login.
    pub fn is_granted(self) -> bool {
        self == AuthResult::Granted
    }
}

impl fmt::Display for AuthResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthResult::Granted => write!(f, "granted"),
            AuthResult::Denied => write!(f, "denied"),
            AuthResult::StoreMissing => write!(f, "credentials file missing"),
            AuthResult::Malformed => write!(f, "credentials file malformed"),
        }
    }
}
