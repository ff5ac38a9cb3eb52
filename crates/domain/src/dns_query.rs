use super::RecordType;
use std::sync::Arc;

/// A question to resolve: domain plus record type.
/// `Arc<str>` keeps clones cheap on the server -> resolver -> cache path.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// Address query, the only kind resolution issues.
    pub fn address(domain: impl Into<Arc<str>>) -> Self {
        Self::new(domain, RecordType::A)
    }
}
