//! Console session
//!
//! Drives the interactive flow: first-time registration, the login/sign-up
//! menu, and the grade editor shown after a successful login.

mod console;

pub use console::{ConsoleSession, SessionOutcome};
