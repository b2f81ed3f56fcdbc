//! Error types
//!
//! Defines the credential store errors and the umbrella error used by the binary.

use std::fmt;
use std::io;

/// Which collaborator-supplied value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Username => write!(f, "username"),
            Field::Password => write!(f, "password"),
        }
    }
}

/// Reason a username or password was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputViolation {
    Empty,
    TooLong { len: usize, max: usize },
    NonAscii { byte: u8, position: usize },
    ControlByte { byte: u8, position: usize },
}

impl fmt::Display for InputViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputViolation::Empty => write!(f, "value is empty"),
            InputViolation::TooLong { len, max } => {
                write!(f, "value is {} bytes, maximum is {}", len, max)
            }
            InputViolation::NonAscii { byte, position } => {
                write!(f, "invalid character read: {} at byte {}", byte, position)
            }
            InputViolation::ControlByte { byte, position } => {
                write!(f, "line-breaking byte {:#04x} at byte {}", byte, position)
            }
        }
    }
}

/// Credential store errors
#[derive(Debug)]
pub enum StoreError {
    InvalidInput {
        field: Field,
        violation: InputViolation,
    },
    Unavailable(io::Error),
}

impl StoreError {
    pub fn invalid(field: Field, violation: InputViolation) -> Self {
        StoreError::InvalidInput { field, violation }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidInput { field, violation } => {
                write!(f, "Invalid {}: {}", field, violation)
            }
            StoreError::Unavailable(e) => write!(f, "Credentials file unavailable: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Unavailable(e) => Some(e),
            StoreError::InvalidInput { .. } => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Unavailable(error)
    }
}

/// General gate error that encompasses all error types
#[derive(Debug)]
pub enum GateError {
    Store(StoreError),
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateError::Store(e) => write!(f, "Store error: {}", e),
            GateError::Config(e) => write!(f, "Configuration error: {}", e),
            GateError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for GateError {}

impl From<StoreError> for GateError {
    fn from(error: StoreError) -> Self {
        GateError::Store(error)
    }
}

impl From<config::ConfigError> for GateError {
    fn from(error: config::ConfigError) -> Self {
        GateError::Config(error)
    }
}

impl From<io::Error> for GateError {
    fn from(error: io::Error) -> Self {
        GateError::Io(error)
    }
}
