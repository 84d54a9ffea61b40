//! The JSON file backed implementation of the account store.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    Account, Error,
    stores::AccountStore,
    validation::{validate_email, validate_password},
};

/// The default file name for the account data file.
pub const DEFAULT_DATA_FILE: &str = "accounts.json";

/// Keeps accounts in memory in registration order and mirrors every
/// successful registration to a JSON file.
///
/// The store assumes single-process, single-run usage: it is the only reader
/// and writer of its data file and takes no locks. Each load or save opens
/// the file, reads or writes it whole, and closes it before returning.
#[derive(Debug)]
pub struct JsonAccountStore {
    accounts: Vec<Account>,
    data_path: PathBuf,
}

impl JsonAccountStore {
    /// Create a store backed by the JSON file at `data_path`.
    ///
    /// A missing file yields an empty store. An existing file is parsed as an
    /// array of account records; every record must carry the `email` and
    /// `secret` fields.
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::MalformedDataFile] if the file exists but cannot be parsed
    ///   as a sequence of accounts,
    /// - [Error::Io] if the file exists but could not be read.
    pub fn new(data_path: impl Into<PathBuf>) -> Result<Self, Error> {
        let data_path = data_path.into();

        let accounts = match load_accounts(&data_path) {
            Ok(accounts) => accounts,
            Err(error) => {
                tracing::error!(
                    "could not load the account data file {}: {error}",
                    data_path.display()
                );
                return Err(error);
            }
        };

        tracing::debug!(
            "loaded {} account(s) from {}",
            accounts.len(),
            data_path.display()
        );

        Ok(Self {
            accounts,
            data_path,
        })
    }

    /// The location of the backing JSON file.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Rewrite the data file with the full account sequence.
    fn save(&self) -> Result<(), Error> {
        let contents = serde_json::to_string_pretty(&self.accounts)
            .map_err(|error| Error::SerializationError(error.to_string()))?;
        fs::write(&self.data_path, contents)?;

        tracing::debug!(
            "saved {} account(s) to {}",
            self.accounts.len(),
            self.data_path.display()
        );

        Ok(())
    }
}

fn load_accounts(path: &Path) -> Result<Vec<Account>, Error> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path)?;

    serde_json::from_str(&contents).map_err(|error| Error::MalformedDataFile(error.to_string()))
}

impl AccountStore for JsonAccountStore {
    fn register(&mut self, email: &str, secret: &str) -> Result<(), Error> {
        if !validate_email(email) {
            return Err(Error::InvalidEmail);
        }

        if !validate_password(secret) {
            return Err(Error::InvalidPassword);
        }

        if self.find_by_email(email).is_some() {
            return Err(Error::DuplicateEmail);
        }

        self.accounts.push(Account::new(email, secret));
        self.save()?;

        tracing::debug!("registered account for {email}");

        Ok(())
    }

    fn find_by_email(&self, email: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.email() == email)
    }

    fn history(&self) -> Vec<Account> {
        self.accounts.clone()
    }

    fn count(&self) -> usize {
        self.accounts.len()
    }
}
