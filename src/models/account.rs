//! This file defines a registered account.

use serde::{Deserialize, Serialize};

/// One registered user: the email/secret pair accepted by the store.
///
/// Accounts are created only through a successful registration and are never
/// mutated afterwards. The email is the unique identifier; comparison is
/// exact, with no case normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    email: String,
    secret: String,
}

impl Account {
    /// Create a new account.
    ///
    /// The caller should ensure that `email` is not already registered and
    /// that both fields passed validation.
    pub fn new(email: &str, secret: &str) -> Self {
        Self {
            email: email.to_string(),
            secret: secret.to_string(),
        }
    }

    /// The email address the account was registered with.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The account's secret, stored in plain text.
    ///
    /// Plain-text storage is a known limitation of this utility, not a
    /// design goal.
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

#[cfg(test)]
mod account_tests {
    use super::Account;

    #[test]
    fn deserializes_record_with_expected_fields() {
        let account: Account =
            serde_json::from_str(r#"{"email": "teste@teste.com", "secret": "senha123"}"#)
                .expect("Could not parse account record");

        assert_eq!(account.email(), "teste@teste.com");
        assert_eq!(account.secret(), "senha123");
    }

    #[test]
    fn deserialization_fails_without_secret_field() {
        let result = serde_json::from_str::<Account>(r#"{"email": "teste@teste.com"}"#);

        assert!(result.is_err());
    }
}
