use ferrous_lookup_domain::{
    AnswerRecord, DnsName, LookupResult, ParsedResponse, QueryType, RecordData, ResponseCode,
};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

pub struct LookupResultBuilder {
    name: String,
    query_type: QueryType,
    rcode: ResponseCode,
    answers: Vec<AnswerRecord>,
    answer_data: String,
    retries: u32,
    elapsed: Duration,
}

impl LookupResultBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            query_type: QueryType::A,
            rcode: ResponseCode::NoError,
            answers: Vec::new(),
            answer_data: String::new(),
            retries: 0,
            elapsed: Duration::from_millis(12),
        }
    }

    pub fn query_type(mut self, query_type: QueryType) -> Self {
        self.query_type = query_type;
        self
    }

    pub fn rcode(mut self, code: u8) -> Self {
        self.rcode = ResponseCode::from_u8(code);
        self
    }

    pub fn address(mut self, addr: Ipv4Addr) -> Self {
        self.answers.push(AnswerRecord {
            name: self.name.parse().unwrap(),
            record_type: 1,
            class: 1,
            ttl: 300,
            rdlength: 4,
            data: RecordData::A(addr),
        });
        if self.answer_data.is_empty() {
            self.answer_data = addr.to_string();
        }
        self
    }

    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn build(self) -> LookupResult {
        let is_valid = self.rcode.is_valid();
        let queried_name: DnsName = self.name.parse().unwrap();

        LookupResult {
            response: ParsedResponse {
                id: 0x4242,
                response_code: self.rcode,
                is_valid,
                error_message: self.rcode.message(),
                queried_name,
                question_type: Some(self.query_type.to_u16()),
                question_class: Some(1),
                request_type_label: Some(self.query_type.response_label()),
                answer_data: if is_valid {
                    self.answer_data
                } else {
                    String::new()
                },
                answers: self.answers,
            },
            server: SocketAddr::from((Ipv4Addr::new(192, 0, 2, 53), 53)),
            elapsed: self.elapsed,
            retries: self.retries,
        }
    }
}
