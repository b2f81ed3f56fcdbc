//! Credential input validation
//!
//! Usernames and passwords must be non-empty ASCII, bounded in length, and
//! free of bytes that would break the line-oriented credentials file.

use crate::error::{Field, InputViolation, StoreError};

/// Validates a username or password before it is used.
///
/// Bytes are checked in order and the first offending byte aborts the scan,
/// reporting which field was rejected.
pub fn validate_field(field: Field, value: &[u8], max_length: usize) -> Result<(), StoreError> {
    for (position, &byte) in value.iter().enumerate() {
        if !byte.is_ascii() {
            return Err(StoreError::invalid(
                field,
                InputViolation::NonAscii { byte, position },
            ));
        }
        if matches!(byte, b'\n' | b'\r' | b'\0') {
            return Err(StoreError::invalid(
                field,
                InputViolation::ControlByte { byte, position },
            ));
        }
    }

    if value.is_empty() {
        return Err(StoreError::invalid(field, InputViolation::Empty));
    }

    if value.len() > max_length {
        return Err(StoreError::invalid(
            field,
            InputViolation::TooLong {
                len: value.len(),
                max: max_length,
            },
        ));
    }

    Ok(())
}
