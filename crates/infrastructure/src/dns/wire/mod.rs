//! Hand-written DNS wire format (RFC 1035 §4)

pub mod message_builder;
pub mod message_parser;
pub mod name_codec;
pub mod reader;

pub use message_builder::MessageBuilder;
pub use message_parser::MessageParser;
pub use name_codec::NameCodec;
pub use reader::WireReader;

pub const HEADER_LEN: usize = 12;
pub const CLASS_IN: u16 = 1;
