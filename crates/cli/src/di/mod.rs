use rootwalk_application::DnsResolver;
use rootwalk_domain::Config;
use rootwalk_infrastructure::dns::{DnsServerHandler, RecursiveResolver, UdpExchange};
use std::sync::Arc;

/// Wires the transport, resolver and datagram handler together.
pub struct DnsServices {
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn build(config: &Config) -> anyhow::Result<Self> {
        let exchange = Arc::new(UdpExchange::new());
        let resolver: Arc<dyn DnsResolver> =
            Arc::new(RecursiveResolver::new(&config.dns, exchange)?);

        Ok(Self {
            handler: DnsServerHandler::new(resolver),
        })
    }
}
