//! Console session implementation

use log::{info, warn};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::auth::{AuthResult, CredentialStore, CredentialVerifier, validate_field};
use crate::error::{Field, GateError, StoreError};
use crate::roster::Roster;

/// What a finished session decided and the roster as it was left
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub result: AuthResult,
    pub roster: Roster,
}

/// Interactive session over any line-based input and output
pub struct ConsoleSession<R, W> {
    reader: R,
    writer: W,
    store: CredentialStore,
    verifier: CredentialVerifier,
}

impl<R, W> ConsoleSession<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, store: CredentialStore, verifier: CredentialVerifier) -> Self {
        Self {
            reader,
            writer,
            store,
            verifier,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Runs one full session: optional first registration, menu, login, grades.
    pub async fn run(&mut self) -> Result<SessionOutcome, GateError> {
        if self.store.exists() {
            self.say("Credentials file found.").await?;
        } else {
            self.say("No Credentials file found, please create at least one new user.")
                .await?;
            self.register_user().await?;
        }

        self.say("Log in (L) or create new user (S)?").await?;
        let choice = self.read_line().await?;

        let credentials = match choice.first() {
            Some(b'L') => {
                self.say("Please enter login credentials:").await?;
                self.read_credentials().await?
            }
            Some(b'S') => {
                self.say("Please enter new login credentials:").await?;
                self.register_user().await?;
                self.say("Now please re-enter for login").await?;
                self.read_credentials().await?
            }
            _ => {
                self.say("Invalid option.").await?;
                None
            }
        };

        let result = match credentials {
            Some((username, password)) => {
                let result = self.verifier.authenticate(&username, &password);
                info!(
                    "Login attempt for {}: {}",
                    String::from_utf8_lossy(&username),
                    result
                );
                result
            }
            None => AuthResult::Denied,
        };

        let mut roster = Roster::default();
        if result.is_granted() {
            self.say("Login successful.").await?;
            self.edit_grades(&mut roster).await?;
        } else {
            if result == AuthResult::StoreMissing {
                self.say("No users registered yet, please create a new user first.")
                    .await?;
            }
            self.say("Login Failed.").await?;
        }

        Ok(SessionOutcome { result, roster })
    }

    /// Reads a new pair and appends it to the store.
    ///
    /// Rejected input and an unavailable store are reported on the console
    /// and the session carries on.
    async fn register_user(&mut self) -> Result<(), GateError> {
        let Some((username, password)) = self.read_credentials().await? else {
            return Ok(());
        };

        match self.store.register(&username, &password) {
            Ok(()) => self.say("Created new user. You may now log in.").await?,
            Err(e) => {
                warn!("Registration failed: {}", e);
                self.say(&format!("ERROR: {}", e)).await?;
            }
        }
        Ok(())
    }

    /// Reads the username line, then the password line.
    ///
    /// An invalid username aborts before the password line is read.
    async fn read_credentials(&mut self) -> Result<Option<(Vec<u8>, Vec<u8>)>, GateError> {
        let Some(username) = self.read_field(Field::Username).await? else {
            return Ok(None);
        };
        let Some(password) = self.read_field(Field::Password).await? else {
            return Ok(None);
        };
        Ok(Some((username, password)))
    }

    async fn read_field(&mut self, field: Field) -> Result<Option<Vec<u8>>, GateError> {
        let value = self.read_line().await?;
        match validate_field(field, &value, self.store.max_field_length()) {
            Ok(()) => Ok(Some(value)),
            Err(e @ StoreError::InvalidInput { .. }) => {
                self.say(&format!("ERROR: {}", e)).await?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn edit_grades(&mut self, roster: &mut Roster) -> Result<(), GateError> {
        self.say("Welcome professor. Below are all student grades").await?;
        self.show_roster(roster).await?;

        self.say("Enter the GPA for students one at a time").await?;
        for index in 0..roster.len() {
            let prompt = format!("{}: ", roster.students()[index].name);
            self.write(prompt.as_bytes()).await?;
            let grade = loop {
                let line = self.read_line().await?;
                if let Some(grade) = Roster::parse_grade(&String::from_utf8_lossy(&line)) {
                    break grade;
                }
            };
            roster.set_grade(index, grade);
        }

        self.say("You have successfully updated class grades. The grades are now as follows:")
            .await?;
        self.show_roster(roster).await?;
        Ok(())
    }

    async fn show_roster(&mut self, roster: &Roster) -> io::Result<()> {
        for line in roster.lines() {
            self.say(&line).await?;
        }
        Ok(())
    }

    /// Reads one input line without its `\n` (or `\r\n`) terminator.
    async fn read_line(&mut self) -> io::Result<Vec<u8>> {
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line).await? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Input closed before the session finished",
            ));
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    async fn say(&mut self, message: &str) -> io::Result<()> {
        self.writer.write_all(message.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await
    }

    async fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes).await?;
        self.writer.flush().await
    }
}
