pub mod lookup;
pub mod transport;
pub mod wire;

pub use lookup::{LookupClient, UdpLookupClient};
pub use transport::{DnsTransport, UdpTransport};
pub use wire::{MessageBuilder, MessageParser, NameCodec};
