use bytes::Bytes;
use dashmap::DashMap;
use std::sync::Arc;

/// Insert-only response cache keyed by normalized domain name.
///
/// Values are the wire bytes of fully resolved upstream responses. Nothing
/// expires and nothing is evicted: the map grows monotonically for the life
/// of the process, and a name maps to at most one stored response.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: DashMap<Arc<str>, Bytes>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Canonical cache key: ASCII-lowercased, fully qualified.
    pub fn normalize(domain: &str) -> Arc<str> {
        let mut key = domain.to_ascii_lowercase();
        if !key.ends_with('.') {
            key.push('.');
        }
        Arc::from(key)
    }

    pub fn lookup(&self, name: &str) -> Option<Bytes> {
        self.entries.get(name).map(|entry| entry.value().clone())
    }

    pub fn store(&self, name: Arc<str>, response: Bytes) {
        self.entries.insert(name, response);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
