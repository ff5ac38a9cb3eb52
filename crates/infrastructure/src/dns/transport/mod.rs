pub mod udp;

pub use udp::UdpExchange;

use async_trait::async_trait;
use rootwalk_domain::DomainError;
use std::net::SocketAddr;

/// One question/response round trip with an upstream server.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    async fn exchange(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
    ) -> Result<Vec<u8>, DomainError>;
}
