//! DNS Message Builder
//!
//! Writes query messages straight into a byte buffer: a 12-byte header
//! followed by a single question.

use super::name_codec::NameCodec;
use super::{CLASS_IN, HEADER_LEN};
use ferrous_lookup_domain::{DnsName, DomainError, QueryType};

/// Standard query, recursion desired.
pub const QUERY_FLAGS: u16 = 0x0100;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query with a random ID.
    pub fn build_query(name: &DnsName, query_type: QueryType) -> Result<Vec<u8>, DomainError> {
        Self::build_query_with_id(fastrand::u16(..), name, query_type)
    }

    /// Build a query with the given ID. Output is fully determined by the
    /// arguments.
    pub fn build_query_with_id(
        id: u16,
        name: &DnsName,
        query_type: QueryType,
    ) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(HEADER_LEN + name.encoded_len() + 4);

        buf.extend_from_slice(&id.to_be_bytes());
        buf.extend_from_slice(&QUERY_FLAGS.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes()); // QDCOUNT
        buf.extend_from_slice(&0u16.to_be_bytes()); // ANCOUNT
        buf.extend_from_slice(&0u16.to_be_bytes()); // NSCOUNT
        buf.extend_from_slice(&0u16.to_be_bytes()); // ARCOUNT

        NameCodec::encode_into(&mut buf, name.labels())?;
        buf.extend_from_slice(&query_type.to_u16().to_be_bytes());
        buf.extend_from_slice(&CLASS_IN.to_be_bytes());

        Ok(buf)
    }

    /// ID carried in the first two bytes of a message.
    pub fn message_id(message: &[u8]) -> Option<u16> {
        match message {
            [hi, lo, ..] => Some(u16::from_be_bytes([*hi, *lo])),
            _ => None,
        }
    }
}
