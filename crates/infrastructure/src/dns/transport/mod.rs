pub mod udp;

use async_trait::async_trait;
use ferrous_lookup_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

pub use udp::UdpTransport;

/// Datagram exchange with a single DNS server.
///
/// `receive` must report an expired wait as `DomainError::QueryTimeout`,
/// distinct from socket failures (`DomainError::Io`).
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(&self, message_bytes: &[u8]) -> Result<(), DomainError>;

    async fn receive(&self, max_bytes: usize, timeout: Duration) -> Result<Vec<u8>, DomainError>;

    fn server_addr(&self) -> SocketAddr;

    fn protocol_name(&self) -> &'static str;
}
