use crate::{DnsName, DomainError, ParsedResponse, QueryType};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

/// One lookup as requested by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub name: DnsName,
    pub query_type: QueryType,
}

impl LookupRequest {
    pub fn new(name: &str, query_type: QueryType) -> Result<Self, DomainError> {
        Ok(Self {
            name: DnsName::from_str(name)?,
            query_type,
        })
    }
}

/// A reply that made it through the retry loop.
#[derive(Debug, Clone)]
pub struct LookupResult {
    pub response: ParsedResponse,
    pub server: SocketAddr,
    /// Time spent in the attempt that produced the reply.
    pub elapsed: Duration,
    /// Zero-based index of that attempt.
    pub retries: u32,
}

/// The single terminal outcome of an invocation.
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    Answered(LookupResult),
    Rejected {
        message: &'static str,
        result: LookupResult,
    },
    NoResponse {
        attempts: u32,
    },
    Failed(DomainError),
}

impl LookupOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LookupOutcome::Answered(_))
    }

    /// True when the server replied, positively or not.
    pub fn server_answered(&self) -> bool {
        matches!(
            self,
            LookupOutcome::Answered(_) | LookupOutcome::Rejected { .. }
        )
    }

    pub fn status(&self) -> &'static str {
        match self {
            LookupOutcome::Answered(_) => "ANSWERED",
            LookupOutcome::Rejected { .. } => "REJECTED",
            LookupOutcome::NoResponse { .. } => "TIMEOUT",
            LookupOutcome::Failed(e) if e.is_malformed() => "MALFORMED",
            LookupOutcome::Failed(_) => "FAILED",
        }
    }
}
