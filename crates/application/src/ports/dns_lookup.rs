use async_trait::async_trait;
use ferrous_lookup_domain::{DomainError, LookupRequest, LookupResult};

/// Sends one query and returns the first usable reply.
///
/// Implementations own the retry policy. A reply carrying an error RCODE is
/// still `Ok`; retry exhaustion surfaces as `DomainError::RetriesExhausted`.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    async fn lookup(&self, request: &LookupRequest) -> Result<LookupResult, DomainError>;
}
