//! Bounded-retry query/response exchange over a `DnsTransport`.

use super::transport::{DnsTransport, UdpTransport};
use super::wire::{MessageBuilder, MessageParser, CLASS_IN};
use async_trait::async_trait;
use ferrous_lookup_application::ports::DnsLookup;
use ferrous_lookup_domain::{
    DomainError, LookupConfig, LookupRequest, LookupResult, ParsedResponse, QueryType,
};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

pub type UdpLookupClient = LookupClient<UdpTransport>;

/// Deadline used when `now + timeout` does not fit in an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Sends a query, waits for the matching reply and retransmits on timeout.
///
/// Every attempt gets a fresh random ID and its own full timeout. Replies
/// with an error RCODE and malformed replies end the exchange; only
/// timeouts and socket errors are retried.
pub struct LookupClient<T: DnsTransport> {
    transport: T,
    config: LookupConfig,
}

impl UdpLookupClient {
    pub async fn connect(server: SocketAddr, config: LookupConfig) -> Result<Self, DomainError> {
        Ok(Self::new(UdpTransport::connect(server).await?, config))
    }
}

impl<T: DnsTransport> LookupClient<T> {
    pub fn new(transport: T, config: LookupConfig) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn query(&self, request: &LookupRequest) -> Result<LookupResult, DomainError> {
        let max_attempts = self.config.max_attempts();

        for attempt in 0..max_attempts {
            let start = Instant::now();
            let id = fastrand::u16(..);
            let message = MessageBuilder::build_query_with_id(id, &request.name, request.query_type)?;

            debug!(
                server = %self.transport.server_addr(),
                protocol = self.transport.protocol_name(),
                name = %request.name,
                record_type = %request.query_type,
                id = id,
                attempt = attempt + 1,
                "Sending query"
            );

            match self.attempt(id, &message, request.query_type).await {
                Ok(response) => {
                    return Ok(LookupResult {
                        response,
                        server: self.transport.server_addr(),
                        elapsed: start.elapsed(),
                        retries: attempt,
                    });
                }
                Err(e) if e.is_transient() => {
                    warn!(
                        server = %self.transport.server_addr(),
                        attempt = attempt + 1,
                        max_attempts = max_attempts,
                        error = %e,
                        "No reply, retrying"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(DomainError::RetriesExhausted {
            attempts: max_attempts,
        })
    }

    /// One send followed by receives until a datagram with our ID arrives
    /// or the attempt's deadline passes.
    async fn attempt(
        &self,
        id: u16,
        message: &[u8],
        query_type: QueryType,
    ) -> Result<ParsedResponse, DomainError> {
        self.transport.send(message).await?;
        let now = Instant::now();
        let deadline = now
            .checked_add(self.config.timeout())
            .unwrap_or(now + FAR_FUTURE);

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(DomainError::QueryTimeout);
            }

            let bytes = self
                .transport
                .receive(self.config.max_response_size, remaining)
                .await?;

            let reply_id = MessageBuilder::message_id(&bytes);
            if reply_id != Some(id) {
                warn!(
                    expected = id,
                    received = ?reply_id,
                    len = bytes.len(),
                    "Ignoring datagram with mismatched ID"
                );
                continue;
            }

            let response = MessageParser::parse(&bytes)?;
            check_question(&response, query_type)?;
            return Ok(response);
        }
    }
}

/// The echoed question, when present, must repeat our type and class IN.
fn check_question(response: &ParsedResponse, query_type: QueryType) -> Result<(), DomainError> {
    match (response.question_type, response.question_class) {
        (Some(qtype), Some(qclass)) if qtype != query_type.to_u16() || qclass != CLASS_IN => {
            Err(DomainError::QuestionMismatch {
                expected: query_type.to_u16(),
                got: qtype,
                class: qclass,
            })
        }
        _ => Ok(()),
    }
}

#[async_trait]
impl<T: DnsTransport> DnsLookup for LookupClient<T> {
    async fn lookup(&self, request: &LookupRequest) -> Result<LookupResult, DomainError> {
        self.query(request).await
    }
}
