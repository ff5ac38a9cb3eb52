//! Configuration module for Rootwalk
//!
//! Configuration structures organized by concern:
//! - `root`: Main configuration, file loading and CLI overrides
//! - `server`: Listening endpoint
//! - `dns`: Root hints and recursion settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
