//! Manual test harness for the registration flow.
//!
//! Runs a fixed sequence of illustrative calls against the default data file
//! and prints each outcome to stdout. This binary exercises the library
//! contract; it is not part of it.

use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use cadastro_rs::{AccountStore, DEFAULT_DATA_FILE, Error, JsonAccountStore};

fn main() {
    setup_logging();

    let mut store =
        JsonAccountStore::new(DEFAULT_DATA_FILE).expect("Could not open the account data file");

    println!("{}", "=".repeat(50));
    println!("MANUAL TEST - USER REGISTRATION");
    println!("{}", "=".repeat(50));

    println!("\n1. valid registration:");
    report(store.register("teste@teste.com", "senha123"));

    println!("\n2. duplicate registration:");
    report(store.register("teste@teste.com", "outrasenha1"));

    println!("\n3. registration with an invalid email:");
    report(store.register("email_invalido", "senha123"));

    println!("\n4. registration with an invalid password:");
    report(store.register("novo@teste.com", "abc12"));

    println!("\n5. look up an existing account:");
    match store.find_by_email("teste@teste.com") {
        Some(account) => println!("{}", account.email()),
        None => println!("not found"),
    }

    println!("\n6. full history:");
    for (position, account) in store.history().iter().enumerate() {
        println!("{}. {}", position + 1, account.email());
    }

    println!("\ntotal registered accounts: {}", store.count());
    println!("{}", "=".repeat(50));
}

/// Print the outcome of a registration attempt as a success flag paired with
/// a human-readable message.
fn report(result: Result<(), Error>) {
    match result {
        Ok(()) => println!("(true, \"user registered successfully\")"),
        Err(error) => println!("(false, \"{error}\")"),
    }
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    tracing_subscriber::registry()
        .with(stdout_log.with_filter(filter::LevelFilter::INFO))
        .init();
}
