//! Rootwalk domain layer
pub mod config;
pub mod dns_query;
pub mod errors;
pub mod record_type;

pub use config::{CliOverrides, Config, ConfigError, DnsConfig, LoggingConfig, ServerConfig};
pub use dns_query::DnsQuery;
pub use errors::DomainError;
pub use record_type::RecordType;
