use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// DNS resolution configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Servers resolution starts from, tried in order. Entries are bare IPs
    /// ("198.41.0.4") or socket addresses ("198.41.0.4:53"); bare IPs use
    /// `upstream_port`. The set is fixed for the life of the process.
    #[serde(default = "default_root_hints")]
    pub root_hints: Vec<String>,

    /// Port queried on servers reached through referral glue (default: 53)
    #[serde(default = "default_upstream_port")]
    pub upstream_port: u16,

    /// Maximum number of referral hops followed below a root server before a
    /// branch is abandoned (default: 16)
    #[serde(default = "default_max_referral_depth")]
    pub max_referral_depth: u32,
}

impl DnsConfig {
    /// Resolve the configured hint entries into socket addresses, in order.
    pub fn resolved_root_hints(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.root_hints
            .iter()
            .map(|entry| {
                if let Ok(addr) = entry.parse::<SocketAddr>() {
                    return Ok(addr);
                }
                entry
                    .parse::<IpAddr>()
                    .map(|ip| SocketAddr::new(ip, self.upstream_port))
                    .map_err(|_| ConfigError::InvalidRootHint(entry.clone()))
            })
            .collect()
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            root_hints: default_root_hints(),
            upstream_port: default_upstream_port(),
            max_referral_depth: default_max_referral_depth(),
        }
    }
}

/// IANA root servers, a through m.
fn default_root_hints() -> Vec<String> {
    [
        "198.41.0.4",     // a.root-servers.net
        "199.9.14.201",   // b.root-servers.net
        "192.33.4.12",    // c.root-servers.net
        "199.7.91.13",    // d.root-servers.net
        "192.203.230.10", // e.root-servers.net
        "192.5.5.241",    // f.root-servers.net
        "192.112.36.4",   // g.root-servers.net
        "198.97.190.53",  // h.root-servers.net
        "192.36.148.17",  // i.root-servers.net
        "192.58.128.30",  // j.root-servers.net
        "193.0.14.129",   // k.root-servers.net
        "199.7.83.42",    // l.root-servers.net
        "202.12.27.33",   // m.root-servers.net
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_upstream_port() -> u16 {
    53
}

fn default_max_referral_depth() -> u32 {
    16
}
