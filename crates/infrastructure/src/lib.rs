//! Rootwalk infrastructure layer: protocol codec, UDP transport, response
//! cache, the recursive resolver and the datagram handler.
pub mod dns;
