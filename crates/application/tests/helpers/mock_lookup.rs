use async_trait::async_trait;
use ferrous_lookup_application::ports::DnsLookup;
use ferrous_lookup_domain::{DomainError, LookupRequest, LookupResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockDnsLookup {
    response: Arc<Mutex<Option<Result<LookupResult, DomainError>>>>,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<LookupRequest>>>,
}

impl MockDnsLookup {
    pub fn new() -> Self {
        Self {
            response: Arc::new(Mutex::new(None)),
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_response(&self, result: LookupResult) {
        *self.response.lock().unwrap() = Some(Ok(result));
    }

    pub fn set_error(&self, error: DomainError) {
        *self.response.lock().unwrap() = Some(Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<LookupRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockDnsLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsLookup for MockDnsLookup {
    async fn lookup(&self, request: &LookupRequest) -> Result<LookupResult, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        self.response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(Err(DomainError::QueryTimeout))
    }
}
