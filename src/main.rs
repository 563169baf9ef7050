//! oolahop entry point
//!
//! This is a minimal entrypoint that:
//! 1. Delegates startup to `oolahop::run`
//! 2. Prints errors to stderr
//! 3. Exits with non-zero on failure
//!
//! Configuration loading, store connection, and server assembly all live
//! behind `run`; main itself opens no files and reads no environment.

#[tokio::main]
async fn main() {
    if let Err(e) = oolahop::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
