use super::{ConfigError, DnsConfig, LoggingConfig, ServerConfig};
use serde::{Deserialize, Serialize};

/// Main configuration, assembled from an optional TOML file plus CLI
/// overrides. Missing sections and fields fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings the CLI may override after the file is loaded.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Config {
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p).map_err(|source| ConfigError::Io {
                    path: p.to_string(),
                    source,
                })?;
                toml::from_str(&raw).map_err(|e| ConfigError::Parse {
                    path: p.to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };
        config.apply(overrides);
        Ok(config)
    }

    fn apply(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.socket_addr()?;

        if self.dns.root_hints.is_empty() {
            return Err(ConfigError::EmptyRootHints);
        }
        self.dns.resolved_root_hints()?;

        if self.dns.max_referral_depth == 0 {
            return Err(ConfigError::ZeroReferralDepth);
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.logging.level.clone()));
        }

        Ok(())
    }
}
