use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Smallest buffer that can hold a DNS header.
pub const MIN_RESPONSE_SIZE: usize = 12;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LookupConfig {
    /// Seconds to wait for each attempt before retransmitting.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retransmissions after the first attempt.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Receive buffer size; classic UDP DNS caps replies at 512 bytes.
    #[serde(default = "default_max_response_size")]
    pub max_response_size: usize,
}

impl LookupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Total number of datagrams the client may send.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            port: default_port(),
            max_response_size: default_max_response_size(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_max_retries() -> u32 {
    3
}

fn default_port() -> u16 {
    53
}

fn default_max_response_size() -> usize {
    512
}
