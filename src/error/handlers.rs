//! Error handlers
//!
//! Provides error reporting and exit-code mapping for the binary.

use crate::error::types::{GateError, StoreError};
use log::error;

/// Handle a gate error
pub fn handle_error(err: &GateError) {
    error!("Roster Gate Error: {}", err);
}

/// Convert error to process exit code
pub fn exit_code(err: &GateError) -> i32 {
    match err {
        GateError::Store(StoreError::InvalidInput { .. }) => 65,
        GateError::Store(StoreError::Unavailable(_)) => 74,
        GateError::Config(_) => 78,
        GateError::Io(_) => 74,
    }
}
