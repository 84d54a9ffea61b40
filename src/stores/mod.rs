//! Contains the trait and implementation for objects that store the domain
//! [models](crate::models).

mod account;
mod json;

pub use account::AccountStore;
pub use json::{DEFAULT_DATA_FILE, JsonAccountStore};
