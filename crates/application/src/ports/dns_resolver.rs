use async_trait::async_trait;
use bytes::Bytes;
use rootwalk_domain::{DnsQuery, DomainError};
use std::net::IpAddr;
use std::sync::Arc;

/// Outcome of a successful resolution.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Addresses extracted from the answer section.
    pub addresses: Arc<Vec<IpAddr>>,

    /// Whether the result came from the cache (no network activity).
    pub cache_hit: bool,

    /// Wire bytes of the resolved upstream response. Opaque to the
    /// application layer; consumed by the server handler when composing
    /// the client reply.
    pub upstream_wire: Bytes,
}

impl Resolution {
    pub fn new(addresses: Vec<IpAddr>, cache_hit: bool, upstream_wire: Bytes) -> Self {
        Self {
            addresses: Arc::new(addresses),
            cache_hit,
            upstream_wire,
        }
    }
}

/// Resolves a query to a full upstream response.
///
/// `Ok(None)` means no server produced a usable answer; transport and codec
/// faults are errors and left to the caller.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<Option<Resolution>, DomainError>;
}
