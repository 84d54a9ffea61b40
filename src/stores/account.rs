//! Defines the account store trait implemented by the JSON backend.

use crate::{Account, Error};

/// Handles the validation, creation, and retrieval of [Account]s.
pub trait AccountStore {
    /// Register a new account from an email/secret pair.
    ///
    /// Checks run in a fixed order: email shape first, then password
    /// strength, then duplicate email. The first failed check wins, and a
    /// failed registration neither mutates the store nor writes the data
    /// file.
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::InvalidEmail] if `email` does not look like an email
    ///   address,
    /// - [Error::InvalidPassword] if `secret` is too short or has no digit,
    /// - [Error::DuplicateEmail] if `email` is already registered,
    /// - [Error::SerializationError] or [Error::Io] if the accepted account
    ///   could not be persisted.
    fn register(&mut self, email: &str, secret: &str) -> Result<(), Error>;

    /// Get the account registered with `email`, or [None] if there is none.
    ///
    /// Comparison is exact: no case normalization is applied.
    fn find_by_email(&self, email: &str) -> Option<&Account>;

    /// A snapshot of all accounts in registration order.
    ///
    /// The snapshot is independent of the store; later registrations do not
    /// show up in a previously returned sequence.
    fn history(&self) -> Vec<Account>;

    /// The number of registered accounts.
    fn count(&self) -> usize;
}
