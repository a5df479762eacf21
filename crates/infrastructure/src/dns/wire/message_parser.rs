use super::name_codec::NameCodec;
use super::reader::WireReader;
use ferrous_lookup_domain::{
    AnswerRecord, DnsName, DomainError, ParsedResponse, QueryType, RecordData, ResponseCode,
};
use std::net::Ipv4Addr;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
struct Header {
    id: u16,
    flags: u16,
    qdcount: u16,
    ancount: u16,
    nscount: u16,
    arcount: u16,
}

impl Header {
    fn read(reader: &mut WireReader<'_>) -> Result<Self, DomainError> {
        Ok(Self {
            id: reader.read_u16()?,
            flags: reader.read_u16()?,
            qdcount: reader.read_u16()?,
            ancount: reader.read_u16()?,
            nscount: reader.read_u16()?,
            arcount: reader.read_u16()?,
        })
    }

    fn response_code(&self) -> ResponseCode {
        ResponseCode::from_u8((self.flags & 0x000F) as u8)
    }
}

pub struct MessageParser;

impl MessageParser {
    /// Decode a reply datagram.
    ///
    /// Negative replies (RCODE 1-5) come back as `Ok` with `is_valid` unset;
    /// `Err` is reserved for bytes that are not a well-formed message.
    pub fn parse(buf: &[u8]) -> Result<ParsedResponse, DomainError> {
        let mut reader = WireReader::new(buf);
        let header = Header::read(&mut reader)?;
        let response_code = header.response_code();

        let (queried_name, question_type, question_class) = if header.qdcount > 0 {
            let name = NameCodec::read_name(&mut reader)?;
            let qtype = reader.read_u16()?;
            let qclass = reader.read_u16()?;
            for _ in 1..header.qdcount {
                NameCodec::read_name(&mut reader)?;
                reader.skip(4)?;
            }
            (name, Some(qtype), Some(qclass))
        } else {
            (DnsName::root(), None, None)
        };

        let answers = Self::read_records(&mut reader, header.ancount)?;
        let authority = Self::read_records(&mut reader, header.nscount)?;
        let additional = Self::read_records(&mut reader, header.arcount)?;

        let requested = question_type.and_then(QueryType::from_u16);
        let is_valid = response_code.is_valid();
        let answer_data = match requested {
            Some(query_type) if is_valid => Self::render_answer(query_type, &answers),
            _ => String::new(),
        };

        debug!(
            id = header.id,
            rcode = %response_code,
            name = %queried_name,
            answers = answers.len(),
            authority = authority.len(),
            additional = additional.len(),
            "DNS response parsed"
        );

        Ok(ParsedResponse {
            id: header.id,
            response_code,
            is_valid,
            error_message: response_code.message(),
            queried_name,
            question_type,
            question_class,
            request_type_label: requested.map(|t| t.response_label()),
            answer_data,
            answers,
        })
    }

    fn read_records(
        reader: &mut WireReader<'_>,
        count: u16,
    ) -> Result<Vec<AnswerRecord>, DomainError> {
        let mut records = Vec::new();
        for _ in 0..count {
            records.push(Self::read_record(reader)?);
        }
        Ok(records)
    }

    fn read_record(reader: &mut WireReader<'_>) -> Result<AnswerRecord, DomainError> {
        let name = NameCodec::read_name(reader)?;
        let record_type = reader.read_u16()?;
        let class = reader.read_u16()?;
        let ttl = reader.read_u32()?;
        let rdlength = reader.read_u16()?;

        let rdata_start = reader.position();
        let rdata = reader.read_bytes(usize::from(rdlength))?;
        let data = Self::read_rdata(reader.message(), rdata_start, rdata, record_type)?;

        Ok(AnswerRecord {
            name,
            record_type,
            class,
            ttl,
            rdlength,
            data,
        })
    }

    /// `rdata` is the already bounds-checked slice starting at `start`;
    /// names inside it may still point back anywhere earlier in `message`.
    fn read_rdata(
        message: &[u8],
        start: usize,
        rdata: &[u8],
        record_type: u16,
    ) -> Result<RecordData, DomainError> {
        let end = start + rdata.len();
        let invalid = |reason| DomainError::InvalidRdata {
            record_type,
            reason,
        };

        match QueryType::from_u16(record_type) {
            Some(QueryType::A) => match rdata {
                [a, b, c, d] => Ok(RecordData::A(Ipv4Addr::new(*a, *b, *c, *d))),
                _ => Err(invalid("address must be 4 bytes")),
            },
            Some(QueryType::NS) => {
                let mut names = Vec::new();
                let mut pos = start;
                while pos < end {
                    let (name, next) = NameCodec::decode(message, pos, message.len())?;
                    if next > end {
                        return Err(invalid("name runs past RDLENGTH"));
                    }
                    names.push(name);
                    pos = next;
                }
                if names.is_empty() {
                    return Err(invalid("empty name server data"));
                }
                Ok(RecordData::NS(names))
            }
            Some(QueryType::MX) => {
                let [hi, lo, ..] = rdata else {
                    return Err(invalid("missing preference"));
                };
                let preference = u16::from_be_bytes([*hi, *lo]);
                let (exchange, next) = NameCodec::decode(message, start + 2, message.len())?;
                if next != end {
                    return Err(invalid("exchange does not fill RDLENGTH"));
                }
                Ok(RecordData::MX {
                    preference,
                    exchange,
                })
            }
            None => Ok(RecordData::Other(rdata.to_vec())),
        }
    }

    /// First A or MX answer, or every NS answer joined by spaces.
    fn render_answer(query_type: QueryType, answers: &[AnswerRecord]) -> String {
        let mut rendered = answers
            .iter()
            .filter(|record| record.query_type() == Some(query_type))
            .filter_map(|record| record.data.render());

        match query_type {
            QueryType::NS => rendered.collect::<Vec<_>>().join(" "),
            QueryType::A | QueryType::MX => rendered.next().unwrap_or_default(),
        }
    }
}
