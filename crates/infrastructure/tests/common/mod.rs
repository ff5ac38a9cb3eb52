#![allow(dead_code)]
use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record};
use rootwalk_domain::{DnsConfig, DomainError};
use rootwalk_infrastructure::dns::{DnsExchange, MessageBuilder};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Mutex;

/// Scripted upstream network: maps each server address to canned response
/// bytes and journals every exchange in order. Querying an unscripted
/// address fails the exchange, so a test also catches traversal of servers
/// it never expected to be reached.
pub struct MockExchange {
    responses: HashMap<SocketAddr, Vec<u8>>,
    journal: Mutex<Vec<SocketAddr>>,
}

impl MockExchange {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            journal: Mutex::new(Vec::new()),
        }
    }

    pub fn script(mut self, server: SocketAddr, response: Vec<u8>) -> Self {
        self.responses.insert(server, response);
        self
    }

    /// Every server queried so far, in order.
    pub fn queries(&self) -> Vec<SocketAddr> {
        self.journal.lock().unwrap().clone()
    }

    pub fn query_count(&self) -> usize {
        self.journal.lock().unwrap().len()
    }
}

#[async_trait]
impl DnsExchange for MockExchange {
    async fn exchange(
        &self,
        server: SocketAddr,
        _message_bytes: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        self.journal.lock().unwrap().push(server);
        self.responses
            .get(&server)
            .cloned()
            .ok_or_else(|| DomainError::TransportReceive {
                server,
                source: std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "no scripted response for this server",
                ),
            })
    }
}

pub fn server(ip: &str) -> SocketAddr {
    SocketAddr::new(IpAddr::V4(ip.parse().unwrap()), 53)
}

pub fn test_config(roots: &[SocketAddr], max_referral_depth: u32) -> DnsConfig {
    DnsConfig {
        root_hints: roots.iter().map(|a| a.to_string()).collect(),
        upstream_port: 53,
        max_referral_depth,
    }
}

/// Response whose answer section holds a single A record.
pub fn answer_response(domain: &str, address: Ipv4Addr) -> Vec<u8> {
    let mut message = response_skeleton();
    let name = Name::from_str(domain).unwrap();
    message.add_answer(Record::from_rdata(name, 300, RData::A(A(address))));
    MessageBuilder::serialize(&message).unwrap()
}

/// Referral: no answers, A-record glue in the additional section.
pub fn referral_response(glue: &[Ipv4Addr]) -> Vec<u8> {
    let mut message = response_skeleton();
    for (i, address) in glue.iter().enumerate() {
        let name = Name::from_str(&format!("ns{i}.example.net.")).unwrap();
        message.add_additional(Record::from_rdata(name, 300, RData::A(A(*address))));
    }
    MessageBuilder::serialize(&message).unwrap()
}

/// Neither answers nor additionals.
pub fn empty_response() -> Vec<u8> {
    MessageBuilder::serialize(&response_skeleton()).unwrap()
}

fn response_skeleton() -> Message {
    let mut message = Message::new(4096, MessageType::Response, OpCode::Query);
    message.set_recursion_available(true);
    message
}
