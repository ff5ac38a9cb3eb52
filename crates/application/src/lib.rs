//! Rootwalk application layer: ports between the serving surface and the
//! resolution engine.
pub mod ports;

pub use ports::{DnsResolver, Resolution};
