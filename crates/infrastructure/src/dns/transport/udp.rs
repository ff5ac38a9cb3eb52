use super::DnsExchange;
use async_trait::async_trait;
use rootwalk_domain::DomainError;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP, one ephemeral socket per query.
///
/// Waits indefinitely for the server's reply: an unresponsive upstream
/// stalls the calling resolution until the process is interrupted.
#[derive(Debug, Default)]
pub struct UdpExchange;

impl UdpExchange {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DnsExchange for UdpExchange {
    async fn exchange(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if server.is_ipv4() {
            "0.0.0.0:0".parse().unwrap()
        } else {
            "[::]:0".parse().unwrap()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|source| DomainError::TransportSend { server, source })?;

        let bytes_sent = socket
            .send_to(message_bytes, server)
            .await
            .map_err(|source| DomainError::TransportSend { server, source })?;

        debug!(server = %server, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let (bytes_received, from_addr) = socket
            .recv_from(&mut recv_buf)
            .await
            .map_err(|source| DomainError::TransportReceive { server, source })?;

        if from_addr.ip() != server.ip() {
            warn!(
                expected = %server,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(server = %server, bytes_received, "UDP response received");

        Ok(recv_buf)
    }
}
