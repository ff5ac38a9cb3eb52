use anyhow::Context;
use rootwalk_domain::Config;
use rootwalk_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::signal;
use tracing::{debug, info};

/// Receive buffer for inbound client datagrams.
const MAX_REQUEST_SIZE: usize = 4096;

/// Bind the UDP endpoint and serve requests strictly one at a time.
///
/// Each request completes, including every upstream hop its resolution
/// needs, before the next datagram is read. Ctrl-C interrupts the loop (and
/// any in-flight resolution) for a clean shutdown; any other fault aborts
/// the loop and bubbles up.
pub async fn start_dns_server(config: &Config, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = config.server.socket_addr()?;

    let socket = UdpSocket::bind(socket_addr)
        .await
        .with_context(|| format!("Unable to bind to {socket_addr}"))?;

    info!(bind_address = %socket_addr, protocol = "UDP", "DNS server listening");

    let mut buf = vec![0u8; MAX_REQUEST_SIZE];
    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                info!("interrupt received, shutting down");
                return Ok(());
            }
            result = serve_one(&socket, &handler, &mut buf) => {
                result?;
            }
        }
    }
}

async fn serve_one(
    socket: &UdpSocket,
    handler: &DnsServerHandler,
    buf: &mut [u8],
) -> anyhow::Result<()> {
    let (len, client) = socket
        .recv_from(buf)
        .await
        .context("Failed to receive request")?;

    debug!(client = %client, bytes = len, "request received");

    let reply = handler.handle(&buf[..len]).await?;

    socket
        .send_to(&reply, client)
        .await
        .with_context(|| format!("Failed to send reply to {client}"))?;

    Ok(())
}
