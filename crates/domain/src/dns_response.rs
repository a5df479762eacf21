use crate::{DnsName, QueryType, ResponseCode};
use std::net::Ipv4Addr;

/// Type-specific payload of a resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    /// NS RDATA decoded until RDLENGTH was consumed; normally one name.
    NS(Vec<DnsName>),
    MX {
        preference: u16,
        exchange: DnsName,
    },
    Other(Vec<u8>),
}

impl RecordData {
    /// Text form used in the answer line; `None` for unsupported types.
    pub fn render(&self) -> Option<String> {
        match self {
            RecordData::A(addr) => Some(addr.to_string()),
            RecordData::NS(names) => Some(
                names
                    .iter()
                    .map(DnsName::to_string)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            RecordData::MX { exchange, .. } => Some(exchange.to_string()),
            RecordData::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub name: DnsName,
    pub record_type: u16,
    pub class: u16,
    pub ttl: u32,
    pub rdlength: u16,
    pub data: RecordData,
}

impl AnswerRecord {
    pub fn query_type(&self) -> Option<QueryType> {
        QueryType::from_u16(self.record_type)
    }
}

/// Everything extracted from one reply datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    pub id: u16,
    pub response_code: ResponseCode,
    pub is_valid: bool,
    pub error_message: Option<&'static str>,
    pub queried_name: DnsName,
    /// Raw QTYPE of the echoed question, if the reply carried one.
    pub question_type: Option<u16>,
    pub question_class: Option<u16>,
    pub request_type_label: Option<&'static str>,
    pub answer_data: String,
    pub answers: Vec<AnswerRecord>,
}

impl ParsedResponse {
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }
}
