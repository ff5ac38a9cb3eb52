use super::cache::QueryCache;
use super::message::{MessageBuilder, ResponseParser, UpstreamResponse};
use super::transport::DnsExchange;
use async_trait::async_trait;
use bytes::Bytes;
use futures::future::{BoxFuture, FutureExt};
use rootwalk_application::{DnsResolver, Resolution};
use rootwalk_domain::{DnsConfig, DnsQuery, DomainError};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::{debug, warn};

/// Referral-walking resolver.
///
/// Answers from the cache when it can; otherwise tries each root hint in
/// order and descends through glue referrals until a response carries an
/// answer section. The first answer-bearing response wins, is cached under
/// the normalized name, and no further servers are consulted.
pub struct RecursiveResolver {
    root_hints: Vec<SocketAddr>,
    upstream_port: u16,
    max_referral_depth: u32,
    cache: QueryCache,
    exchange: Arc<dyn DnsExchange>,
}

impl RecursiveResolver {
    pub fn new(config: &DnsConfig, exchange: Arc<dyn DnsExchange>) -> Result<Self, DomainError> {
        let root_hints = config
            .resolved_root_hints()
            .map_err(|e| DomainError::InvalidUpstreamAddress(e.to_string()))?;

        Ok(Self {
            root_hints,
            upstream_port: config.upstream_port,
            max_referral_depth: config.max_referral_depth,
            cache: QueryCache::new(),
            exchange,
        })
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    /// One hop of recursive descent: query `server`; a non-empty answer
    /// section is terminal, otherwise each A record in the additional
    /// section is followed in wire order. `None` means the branch produced
    /// nothing usable and the caller should move on. Transport faults
    /// propagate unhandled.
    fn descend<'a>(
        &'a self,
        query: &'a DnsQuery,
        server: SocketAddr,
        depth: u32,
    ) -> BoxFuture<'a, Result<Option<UpstreamResponse>, DomainError>> {
        async move {
            if depth > self.max_referral_depth {
                warn!(
                    domain = %query.domain,
                    depth,
                    "referral chain exceeded depth limit, abandoning branch"
                );
                return Ok(None);
            }

            let query_bytes = MessageBuilder::build_query(&query.domain, &query.record_type)?;
            let wire = self.exchange.exchange(server, &query_bytes).await?;
            let response = ResponseParser::parse_bytes(Bytes::from(wire))?;

            debug!(
                domain = %query.domain,
                server = %server,
                depth,
                answers = response.message.answers().len(),
                additionals = response.message.additionals().len(),
                "upstream response"
            );

            if response.has_answers() {
                return Ok(Some(response));
            }

            for glue in response.glue_addresses() {
                let target = SocketAddr::new(IpAddr::V4(glue), self.upstream_port);
                if let Some(answer) = self.descend(query, target, depth + 1).await? {
                    return Ok(Some(answer));
                }
            }

            Ok(None)
        }
        .boxed()
    }
}

#[async_trait]
impl DnsResolver for RecursiveResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Option<Resolution>, DomainError> {
        let key = QueryCache::normalize(&query.domain);

        if let Some(wire) = self.cache.lookup(&key) {
            let cached = ResponseParser::parse_bytes(wire)?;
            debug!(domain = %key, "cache hit");
            return Ok(Some(Resolution::new(cached.addresses, true, cached.raw_bytes)));
        }

        let normalized = DnsQuery::new(key.clone(), query.record_type);

        for server in &self.root_hints {
            if let Some(response) = self.descend(&normalized, *server, 0).await? {
                self.cache.store(key.clone(), response.raw_bytes.clone());
                debug!(domain = %key, server = %server, "resolved and cached");
                return Ok(Some(Resolution::new(
                    response.addresses,
                    false,
                    response.raw_bytes,
                )));
            }
        }

        Ok(None)
    }
}
