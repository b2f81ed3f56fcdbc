//! Error handling
//!
//! Defines error types and handling for the credential gate.

pub mod handlers;
pub mod types;

pub use types::*;
