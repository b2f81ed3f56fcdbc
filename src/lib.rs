pub mod auth;
pub mod config;
pub mod error;
pub mod roster;
pub mod session;
pub mod utils;

pub use auth::{AuthResult, CredentialStore, CredentialVerifier};
pub use config::GateConfig;
pub use error::{GateError, StoreError};
