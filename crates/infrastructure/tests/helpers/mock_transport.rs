use async_trait::async_trait;
use ferrous_lookup_domain::DomainError;
use ferrous_lookup_infrastructure::dns::DnsTransport;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::Duration;

use super::builders::ReplyBuilder;

/// What the next `receive` call produces.
pub enum Step {
    Timeout,
    SocketError,
    /// Reply to the last query with the given RCODE and A answer.
    Reply { rcode: u8, address: [u8; 4] },
    /// Well-formed reply carrying a different ID.
    StaleReply,
    /// Raw bytes with the last query's ID patched into the first two bytes.
    Raw(Vec<u8>),
}

/// Scripted transport. Once the script runs out every receive times out.
pub struct MockTransport {
    steps: Mutex<VecDeque<Step>>,
    sent: Mutex<Vec<Vec<u8>>>,
    receives: Mutex<usize>,
}

impl MockTransport {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            sent: Mutex::new(Vec::new()),
            receives: Mutex::new(0),
        }
    }

    pub fn always_timing_out() -> Self {
        Self::new(Vec::new())
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }

    pub fn receive_count(&self) -> usize {
        *self.receives.lock().unwrap()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(&self, message_bytes: &[u8]) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push(message_bytes.to_vec());
        Ok(())
    }

    async fn receive(&self, max_bytes: usize, timeout: Duration) -> Result<Vec<u8>, DomainError> {
        *self.receives.lock().unwrap() += 1;
        let step = self.steps.lock().unwrap().pop_front();
        let query = self.sent.lock().unwrap().last().cloned().unwrap_or_default();

        let mut bytes = match step {
            None | Some(Step::Timeout) => {
                tokio::time::sleep(timeout).await;
                return Err(DomainError::QueryTimeout);
            }
            Some(Step::SocketError) => {
                return Err(DomainError::Io("connection refused".to_string()));
            }
            Some(Step::Reply { rcode, address }) => {
                ReplyBuilder::for_query(&query).rcode(rcode).a(address).build()
            }
            Some(Step::StaleReply) => {
                let id = u16::from_be_bytes([query[0], query[1]]).wrapping_add(1);
                ReplyBuilder::for_query(&query).id(id).a([6, 6, 6, 6]).build()
            }
            Some(Step::Raw(mut raw)) => {
                if raw.len() >= 2 {
                    raw[..2].copy_from_slice(&query[..2]);
                }
                raw
            }
        };

        bytes.truncate(max_bytes);
        Ok(bytes)
    }

    fn server_addr(&self) -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 53))
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}
