use crate::ports::DnsLookup;
use ferrous_lookup_domain::{DomainError, LookupOutcome, LookupRequest};
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct ExecuteLookupUseCase {
    lookup: Arc<dyn DnsLookup>,
}

impl ExecuteLookupUseCase {
    pub fn new(lookup: Arc<dyn DnsLookup>) -> Self {
        Self { lookup }
    }

    /// Runs the lookup and reduces it to exactly one terminal outcome.
    pub async fn execute(&self, request: &LookupRequest) -> LookupOutcome {
        if let Err(e) = request.name.validate() {
            error!(error = %e, name = %request.name, "Refusing to send invalid name");
            return LookupOutcome::Failed(e);
        }

        match self.lookup.lookup(request).await {
            Ok(result) if result.response.is_valid => {
                info!(
                    name = %result.response.queried_name,
                    record_type = %request.query_type,
                    answer = %result.response.answer_data,
                    retries = result.retries,
                    elapsed_ms = result.elapsed.as_millis() as u64,
                    "Lookup answered"
                );
                LookupOutcome::Answered(result)
            }
            Ok(result) => {
                let message = result
                    .response
                    .error_message
                    .unwrap_or_else(|| result.response.response_code.as_str());
                warn!(
                    name = %request.name,
                    rcode = %result.response.response_code,
                    server = %result.server,
                    "Server rejected query"
                );
                LookupOutcome::Rejected { message, result }
            }
            Err(DomainError::RetriesExhausted { attempts }) => {
                warn!(name = %request.name, attempts = attempts, "No response from server");
                LookupOutcome::NoResponse { attempts }
            }
            Err(e) => {
                error!(name = %request.name, error = %e, "Lookup failed");
                LookupOutcome::Failed(e)
            }
        }
    }
}
