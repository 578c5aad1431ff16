//! Logging setup for the S-Hive storefront.
//!
//! Library crates only emit `tracing` events. Binaries call [`init_logging`]
//! once at startup to install a subscriber that writes them to stderr.

mod logging;

pub use logging::*;
