use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid root hint entry: {0}")]
    InvalidRootHint(String),

    #[error("root_hints must not be empty")]
    EmptyRootHints,

    #[error("max_referral_depth must be at least 1")]
    ZeroReferralDepth,

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}
