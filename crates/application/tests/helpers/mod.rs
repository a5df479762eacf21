#![allow(dead_code)]

mod builders;
mod mock_lookup;

pub use builders::LookupResultBuilder;
pub use mock_lookup::MockDnsLookup;
