//! Credential storage
//!
//! Appends new credential records to the credentials file. Records are never
//! rewritten, compacted, or deleted, and duplicate usernames are allowed.
//!
//! Concurrent writers are not coordinated: two simultaneous registrations can
//! interleave and break the username/digest pairing. Readers surface that as
//! [`AuthResult::Malformed`](super::AuthResult::Malformed).

use log::{error, info};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::digest::digest_hex;
use super::format::encode_record;
use super::validator::validate_field;
use crate::config::GateConfig;
use crate::error::{Field, StoreError};

/// Append-only credentials file
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
    max_field_length: usize,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>, max_field_length: usize) -> Self {
        Self {
            path: path.into(),
            max_field_length,
        }
    }

    pub fn from_config(config: &GateConfig) -> Self {
        Self::new(config.credentials_path(), config.max_field_length)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_field_length(&self) -> usize {
        self.max_field_length
    }

    /// True when the credentials file is present and accessible.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Validates the pair, then appends the username and password digest.
    ///
    /// Nothing is written unless both values pass validation.
    pub fn register(&self, username: &[u8], password: &[u8]) -> Result<(), StoreError> {
        validate_field(Field::Username, username, self.max_field_length)?;
        validate_field(Field::Password, password, self.max_field_length)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                error!(
                    "Could not open credentials file {} for append: {}",
                    self.path.display(),
                    e
                );
                StoreError::Unavailable(e)
            })?;

        let record = encode_record(username, &digest_hex(password));
        file.write_all(&record)?;
        file.flush()?;

        info!(
            "Registered user {} in {}",
            String::from_utf8_lossy(username),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::digest::digest_hex;
    use crate::error::InputViolation;
    use std::fs;

    fn temp_store() -> (tempfile::TempDir, CredentialStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("creds.txt"), 49);
        (dir, store)
    }

    #[test]
    fn test_exists_tracks_first_register() {
        let (_dir, store) = temp_store();
        assert!(!store.exists());
        store.register(b"alice", b"secret1").unwrap();
        assert!(store.exists());
    }

    #[test]
    fn test_register_appends_two_lines_per_record() {
        let (_dir, store) = temp_store();
        store.register(b"alice", b"secret1").unwrap();
        store.register(b"alice", b"secret2").unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        let expected = format!(
            "alice\n{}\nalice\n{}\n",
            digest_hex(b"secret1"),
            digest_hex(b"secret2")
        );
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_invalid_password_writes_nothing() {
        let (_dir, store) = temp_store();
        let err = store.register(b"alice", "sécret".as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            StoreError::InvalidInput {
                field: Field::Password,
                violation: InputViolation::NonAscii { position: 1, .. }
            }
        ));
        assert!(!store.exists());
    }

    #[test]
    fn test_over_length_username_writes_nothing() {
        let (_dir, store) = temp_store();
        store.register(b"bob", b"pw").unwrap();
        let before = fs::read(store.path()).unwrap();

        let long = vec![b'u'; 50];
        assert!(store.register(&long, b"pw").is_err());
        assert_eq!(fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn test_missing_directory_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("absent").join("creds.txt"), 49);
        assert!(matches!(
            store.register(b"alice", b"secret1"),
            Err(StoreError::Unavailable(_))
        ));
    }
}
