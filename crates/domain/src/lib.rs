//! ferrous-lookup domain layer
pub mod config;
pub mod dns_name;
pub mod dns_response;
pub mod errors;
pub mod lookup;
pub mod query_type;
pub mod response_code;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, LookupConfig};
pub use dns_name::{DnsName, MAX_LABEL_LEN, MAX_NAME_LEN};
pub use dns_response::{AnswerRecord, ParsedResponse, RecordData};
pub use errors::DomainError;
pub use lookup::{LookupOutcome, LookupRequest, LookupResult};
pub use query_type::QueryType;
pub use response_code::ResponseCode;
