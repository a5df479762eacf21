#![allow(dead_code)]

pub mod builders;
pub mod dns_server_mock;
pub mod mock_transport;

pub use builders::ReplyBuilder;
pub use dns_server_mock::MockDnsServer;
pub use mock_transport::{MockTransport, Step};
