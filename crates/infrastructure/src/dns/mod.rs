pub mod cache;
pub mod message;
pub mod resolver;
pub mod server;
pub mod transport;

pub use cache::QueryCache;
pub use message::{MessageBuilder, ResponseParser, UpstreamResponse};
pub use resolver::RecursiveResolver;
pub use server::DnsServerHandler;
pub use transport::{DnsExchange, UdpExchange};
