use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported DNS record types.
///
/// Resolution walks the delegation chain for address records only; every
/// outbound question is an A query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    A,
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => write!(f, "A"),
        }
    }
}
