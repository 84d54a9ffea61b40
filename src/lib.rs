//! Cadastro is a small local user-registration utility.
//!
//! This library validates email/password pairs and keeps accepted
//! registrations in a JSON-backed account store. There is no authentication,
//! no session handling, and no network boundary; a single process owns the
//! data file for the duration of a run.

#![warn(missing_docs)]

pub mod models;
pub mod stores;
pub mod validation;

pub use models::Account;
pub use stores::{AccountStore, DEFAULT_DATA_FILE, JsonAccountStore};
pub use validation::{validate_email, validate_password};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The email given during registration does not look like an email
    /// address. The caller should try again with an address shaped like
    /// `example@domain.com`.
    #[error("invalid email — expected format example@domain.com")]
    InvalidEmail,

    /// The password given during registration is too short or contains no
    /// digit.
    #[error("invalid password — must be at least 6 characters and include 1 digit")]
    InvalidPassword,

    /// The email given during registration already belongs to an account.
    /// The caller should try again with a different email address.
    #[error("email already registered")]
    DuplicateEmail,

    /// The account data file exists but its contents do not match the
    /// expected schema. This is fatal at load time; records are never
    /// silently dropped.
    #[error("malformed account data file: {0}")]
    MalformedDataFile(String),

    /// An error occurred while serializing the account sequence as JSON.
    #[error("could not serialize accounts as JSON: {0}")]
    SerializationError(String),

    /// An error occurred while reading or writing the account data file.
    #[error("could not access the account data file: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value.to_string())
    }
}

impl Error {
    /// Whether the error is a recoverable rejection of a registration
    /// attempt, as opposed to a storage failure.
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            Error::InvalidEmail | Error::InvalidPassword | Error::DuplicateEmail
        )
    }
}
