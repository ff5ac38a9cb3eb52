use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid upstream address: {0}")]
    InvalidUpstreamAddress(String),

    #[error("Failed to encode DNS message: {0}")]
    MessageEncoding(String),

    #[error("Failed to decode DNS message: {0}")]
    MessageDecoding(String),

    #[error("Failed to send query to {server}: {source}")]
    TransportSend {
        server: SocketAddr,
        source: std::io::Error,
    },

    #[error("Failed to receive response from {server}: {source}")]
    TransportReceive {
        server: SocketAddr,
        source: std::io::Error,
    },
}
