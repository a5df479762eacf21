mod dns_lookup;

pub use dns_lookup::DnsLookup;

// Re-export for convenience
pub use ferrous_lookup_domain::{LookupRequest, LookupResult};
