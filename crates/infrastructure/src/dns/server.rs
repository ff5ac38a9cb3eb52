use super::message::{MessageBuilder, ResponseParser};
use hickory_proto::op::{Message, MessageParts, MessageType, ResponseCode};
use rootwalk_application::DnsResolver;
use rootwalk_domain::{DnsQuery, DomainError};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Per-datagram request processing: decode the request, resolve every
/// question as an address query, and compose the reply.
pub struct DnsServerHandler {
    resolver: Arc<dyn DnsResolver>,
}

impl DnsServerHandler {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Handle one request datagram and return the encoded reply.
    ///
    /// The reply is the request with its answer section replaced and the
    /// header flags forced to response + recursion-desired +
    /// recursion-available, whatever the resolution outcome. A resolution
    /// that yields nothing still produces a well-formed reply with an empty
    /// answer section.
    pub async fn handle(&self, request_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let request = Message::from_vec(request_bytes)
            .map_err(|e| DomainError::MessageDecoding(e.to_string()))?;

        let mut reply = request.clone();
        reply.take_answers();
        // `Message` exposes no inherent `set_message_type`; the message type
        // lives on the header, reached here via `MessageParts`.
        let mut parts = MessageParts::from(reply);
        parts.header.set_message_type(MessageType::Response);
        let mut reply = Message::from(parts);
        reply.set_authoritative(false);
        reply.set_truncated(false);
        reply.set_recursion_desired(true);
        reply.set_recursion_available(true);
        reply.set_authentic_data(false);
        reply.set_checking_disabled(false);
        reply.set_response_code(ResponseCode::NoError);

        for question in request.queries() {
            let domain = question.name().to_utf8();
            debug!(domain = %domain, qtype = %question.query_type(), "client question");

            let query = DnsQuery::address(domain.as_str());
            match self.resolver.resolve(&query).await? {
                Some(resolution) => {
                    let resolved = ResponseParser::parse_bytes(resolution.upstream_wire.clone())?;
                    let answers = resolved.message.answers();

                    if answers.is_empty() {
                        warn!(domain = %domain, "no answer section");
                    }
                    for record in answers {
                        reply.add_answer(record.clone());
                    }
                    for address in resolution.addresses.iter() {
                        info!(
                            domain = %domain,
                            address = %address,
                            cache_hit = resolution.cache_hit,
                            "resolved"
                        );
                    }
                }
                None => {
                    warn!(domain = %domain, "no answer section");
                }
            }
        }

        MessageBuilder::serialize(&reply)
    }
}
