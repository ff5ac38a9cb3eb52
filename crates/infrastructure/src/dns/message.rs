//! DNS message codec over `hickory-proto`.
//!
//! Wire-format construction and parsing live behind this module; the rest of
//! the crate deals in [`UpstreamResponse`] and raw byte buffers.

use bytes::Bytes;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RData, RecordType as WireRecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use rootwalk_domain::{DomainError, RecordType};
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// A decoded upstream response together with the bytes it came from.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub message: Message,

    /// Addresses carried by the answer section.
    pub addresses: Vec<IpAddr>,

    /// The response exactly as received.
    pub raw_bytes: Bytes,
}

impl UpstreamResponse {
    pub fn has_answers(&self) -> bool {
        !self.message.answers().is_empty()
    }

    /// A-record glue from the additional section, in wire order. A non-empty
    /// result marks the response as a referral.
    pub fn glue_addresses(&self) -> Vec<Ipv4Addr> {
        self.message
            .additionals()
            .iter()
            .filter_map(|record| match record.data() {
                RData::A(a) => Some(a.0),
                _ => None,
            })
            .collect()
    }
}

/// Builds DNS query messages in wire format.
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a single-question query and serialize it: fresh random id per
    /// call, RD set, class IN.
    pub fn build_query(domain: &str, record_type: &RecordType) -> Result<Vec<u8>, DomainError> {
        let name = Name::from_str(domain)
            .map_err(|e| DomainError::InvalidDomainName(format!("{domain}: {e}")))?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(wire_record_type(record_type));
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        Self::serialize(&message)
    }

    /// Serialize a message to wire format bytes.
    pub fn serialize(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        message
            .emit(&mut encoder)
            .map_err(|e| DomainError::MessageEncoding(e.to_string()))?;
        Ok(buf)
    }
}

/// Parses upstream responses from wire format.
pub struct ResponseParser;

impl ResponseParser {
    /// Parse a response from owned bytes (zero-copy for `raw_bytes`).
    pub fn parse_bytes(response_bytes: Bytes) -> Result<UpstreamResponse, DomainError> {
        let message = Message::from_vec(&response_bytes)
            .map_err(|e| DomainError::MessageDecoding(e.to_string()))?;

        let addresses = message
            .answers()
            .iter()
            .filter_map(|record| match record.data() {
                RData::A(a) => Some(IpAddr::V4(a.0)),
                _ => None,
            })
            .collect();

        Ok(UpstreamResponse {
            message,
            addresses,
            raw_bytes: response_bytes,
        })
    }

    pub fn parse(response_bytes: &[u8]) -> Result<UpstreamResponse, DomainError> {
        Self::parse_bytes(Bytes::copy_from_slice(response_bytes))
    }
}

fn wire_record_type(record_type: &RecordType) -> WireRecordType {
    match record_type {
        RecordType::A => WireRecordType::A,
    }
}
