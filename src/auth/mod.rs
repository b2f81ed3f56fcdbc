//! Authentication system
//!
//! Handles credential registration, the shared credentials file layout, and
//! verification of candidate usernames and passwords.

pub mod digest;
pub mod format;
pub mod results;
pub mod store;
pub mod validator;
pub mod verifier;

pub use results::AuthResult;
pub use store::CredentialStore;
pub use validator::validate_field;
pub use verifier::CredentialVerifier;
