//! Complete resolution flow
//!
//! Drives the real pipeline (handler -> resolver -> UDP transport) against a
//! synthetic delegation chain served by mock nameservers on loopback:
//! root refers to the TLD server, the TLD server refers to the authoritative
//! server, and only the authoritative server answers.

use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use rootwalk_application::DnsResolver;
use rootwalk_domain::{DnsConfig, DnsQuery, RecordType};
use rootwalk_infrastructure::dns::{DnsServerHandler, MessageBuilder, RecursiveResolver, UdpExchange};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;

const EXAMPLE_A: Ipv4Addr = Ipv4Addr::new(93, 184, 216, 34);

/// What a mock nameserver puts in its responses.
#[derive(Clone, Copy)]
enum Role {
    /// Referral: A-record glue for `0` in the additional section.
    Referral(Ipv4Addr),
    /// Terminal answer: `A 93.184.216.34`.
    Authoritative,
}

/// Serve scripted responses on `socket`, counting handled queries.
fn spawn_nameserver(socket: UdpSocket, role: Role, queries: Arc<AtomicUsize>) {
    tokio::spawn(async move {
        let mut buf = vec![0u8; 4096];
        loop {
            let Ok((len, peer)) = socket.recv_from(&mut buf).await else {
                break;
            };
            queries.fetch_add(1, Ordering::SeqCst);

            let Ok(request) = Message::from_vec(&buf[..len]) else {
                continue;
            };
            let mut response =
                Message::new(request.id(), MessageType::Response, OpCode::Query);
            if let Some(question) = request.queries().first() {
                response.add_query(question.clone());
            }

            match role {
                Role::Referral(glue) => {
                    response.add_additional(Record::from_rdata(
                        Name::from_str("ns1.example.net.").unwrap(),
                        300,
                        RData::A(A(glue)),
                    ));
                }
                Role::Authoritative => {
                    response.add_answer(Record::from_rdata(
                        Name::from_str("example.com.").unwrap(),
                        300,
                        RData::A(A(EXAMPLE_A)),
                    ));
                }
            }

            let mut out = Vec::with_capacity(512);
            let mut encoder = BinEncoder::new(&mut out);
            if response.emit(&mut encoder).is_ok() {
                let _ = socket.send_to(&out, peer).await;
            }
        }
    });
}

struct Chain {
    root_hint: String,
    upstream_port: u16,
    root_queries: Arc<AtomicUsize>,
    tld_queries: Arc<AtomicUsize>,
    auth_queries: Arc<AtomicUsize>,
}

/// Glue records carry bare IPs, so the TLD and authoritative mocks must
/// share one port across distinct loopback addresses; that shared port
/// becomes the resolver's upstream port.
async fn start_chain() -> Chain {
    let tld_ip = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 2));
    let auth_ip = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 3));

    let (tld_socket, auth_socket) = loop {
        let tld = UdpSocket::bind(SocketAddr::new(tld_ip, 0)).await.unwrap();
        let port = tld.local_addr().unwrap().port();
        if let Ok(auth) = UdpSocket::bind(SocketAddr::new(auth_ip, port)).await {
            break (tld, auth);
        }
    };
    let upstream_port = tld_socket.local_addr().unwrap().port();

    let root_socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let root_hint = root_socket.local_addr().unwrap().to_string();

    let root_queries = Arc::new(AtomicUsize::new(0));
    let tld_queries = Arc::new(AtomicUsize::new(0));
    let auth_queries = Arc::new(AtomicUsize::new(0));

    spawn_nameserver(
        root_socket,
        Role::Referral(Ipv4Addr::new(127, 0, 0, 2)),
        root_queries.clone(),
    );
    spawn_nameserver(
        tld_socket,
        Role::Referral(Ipv4Addr::new(127, 0, 0, 3)),
        tld_queries.clone(),
    );
    spawn_nameserver(auth_socket, Role::Authoritative, auth_queries.clone());

    Chain {
        root_hint,
        upstream_port,
        root_queries,
        tld_queries,
        auth_queries,
    }
}

fn build_handler(chain: &Chain) -> DnsServerHandler {
    let config = DnsConfig {
        root_hints: vec![chain.root_hint.clone()],
        upstream_port: chain.upstream_port,
        max_referral_depth: 16,
    };
    let resolver = RecursiveResolver::new(&config, Arc::new(UdpExchange::new())).unwrap();
    DnsServerHandler::new(Arc::new(resolver))
}

#[tokio::test]
async fn delegation_chain_resolves_example_com() {
    let chain = start_chain().await;
    let handler = build_handler(&chain);

    let request = MessageBuilder::build_query("example.com.", &RecordType::A).unwrap();
    let reply_bytes = handler.handle(&request).await.unwrap();
    let reply = Message::from_vec(&reply_bytes).unwrap();

    assert_eq!(reply.message_type(), MessageType::Response);
    assert!(reply.recursion_desired());
    assert!(reply.recursion_available());
    assert!(!reply.authoritative());
    assert!(!reply.truncated());
    assert_eq!(reply.response_code(), ResponseCode::NoError);

    assert_eq!(reply.answers().len(), 1);
    match reply.answers()[0].data() {
        RData::A(a) => assert_eq!(a.0, EXAMPLE_A),
        other => panic!("expected A record, got {other:?}"),
    }

    // Exactly one hop per level of the chain.
    assert_eq!(chain.root_queries.load(Ordering::SeqCst), 1);
    assert_eq!(chain.tld_queries.load(Ordering::SeqCst), 1);
    assert_eq!(chain.auth_queries.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn repeat_query_is_answered_from_cache() {
    let chain = start_chain().await;
    let handler = build_handler(&chain);

    let request = MessageBuilder::build_query("example.com.", &RecordType::A).unwrap();
    let first = handler.handle(&request).await.unwrap();
    let second = handler.handle(&request).await.unwrap();

    let first = Message::from_vec(&first).unwrap();
    let second = Message::from_vec(&second).unwrap();
    assert_eq!(first.answers(), second.answers());

    // The second round trip touched no nameserver.
    assert_eq!(chain.root_queries.load(Ordering::SeqCst), 1);
    assert_eq!(chain.tld_queries.load(Ordering::SeqCst), 1);
    assert_eq!(chain.auth_queries.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn resolver_port_resolves_through_the_chain_directly() {
    let chain = start_chain().await;
    let config = DnsConfig {
        root_hints: vec![chain.root_hint.clone()],
        upstream_port: chain.upstream_port,
        max_referral_depth: 16,
    };
    let resolver = RecursiveResolver::new(&config, Arc::new(UdpExchange::new())).unwrap();

    let resolution = resolver
        .resolve(&DnsQuery::new("example.com.", RecordType::A))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(*resolution.addresses, vec![IpAddr::V4(EXAMPLE_A)]);
    assert!(!resolution.cache_hit);
}
