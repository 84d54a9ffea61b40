//! This module defines the domain data types.

mod account;

pub use account::Account;
