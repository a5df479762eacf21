//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). The socket is connected to the
//! server, so the kernel drops datagrams from any other source.

use super::DnsTransport;
use async_trait::async_trait;
use ferrous_lookup_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// DNS over UDP transport
pub struct UdpTransport {
    socket: UdpSocket,
    server_addr: SocketAddr,
}

impl UdpTransport {
    /// Bind an ephemeral local port and connect it to `server_addr`.
    pub async fn connect(server_addr: SocketAddr) -> Result<Self, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::Io(format!("Failed to bind UDP socket: {}", e)))?;

        socket.connect(server_addr).await.map_err(|e| {
            DomainError::Io(format!("Failed to connect UDP socket to {}: {}", server_addr, e))
        })?;

        Ok(Self {
            socket,
            server_addr,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        Ok(self.socket.local_addr()?)
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(&self, message_bytes: &[u8]) -> Result<(), DomainError> {
        let bytes_sent = self.socket.send(message_bytes).await.map_err(|e| {
            DomainError::Io(format!(
                "Failed to send UDP query to {}: {}",
                self.server_addr, e
            ))
        })?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        Ok(())
    }

    async fn receive(&self, max_bytes: usize, timeout: Duration) -> Result<Vec<u8>, DomainError> {
        let mut recv_buf = vec![0u8; max_bytes];

        let bytes_received = tokio::time::timeout(timeout, self.socket.recv(&mut recv_buf))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| {
                DomainError::Io(format!(
                    "Failed to receive UDP response from {}: {}",
                    self.server_addr, e
                ))
            })?;

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(recv_buf)
    }

    fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
