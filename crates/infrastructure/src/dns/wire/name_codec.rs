//! Domain name wire encoding (RFC 1035 §3.1, §4.1.4)
//!
//! Names are written uncompressed as length-prefixed labels. Decoding
//! follows compression pointers with an explicit cursor; every pointer must
//! land strictly before the run of labels that contains it, so each jump
//! moves backwards and decoding always terminates.

use super::reader::WireReader;
use ferrous_lookup_domain::{DnsName, DomainError, MAX_LABEL_LEN, MAX_NAME_LEN};

const POINTER_MASK: u8 = 0xC0;

pub struct NameCodec;

impl NameCodec {
    /// Encode labels as `len, bytes..., len, bytes..., 0`.
    pub fn encode<S: AsRef<str>>(labels: &[S]) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(MAX_NAME_LEN);
        Self::encode_into(&mut buf, labels)?;
        Ok(buf)
    }

    /// Append the encoded labels to `buf`. Nothing is written on error.
    pub fn encode_into<S: AsRef<str>>(buf: &mut Vec<u8>, labels: &[S]) -> Result<(), DomainError> {
        let mut encoded_len = 1;
        for label in labels {
            let len = label.as_ref().len();
            if len == 0 {
                return Err(DomainError::EmptyLabel);
            }
            if len > MAX_LABEL_LEN {
                return Err(DomainError::LabelTooLong { len });
            }
            encoded_len += len + 1;
        }
        if encoded_len > MAX_NAME_LEN {
            return Err(DomainError::NameTooLong { len: encoded_len });
        }

        buf.reserve(encoded_len);
        for label in labels {
            let label = label.as_ref().as_bytes();
            buf.push(label.len() as u8);
            buf.extend_from_slice(label);
        }
        buf.push(0);
        Ok(())
    }

    /// Decode the name starting at `start` within the first `message_len`
    /// bytes of `buf`.
    ///
    /// Returns the name and the offset just past its encoding in the
    /// sequential stream: after the terminating zero byte, or after the
    /// first compression pointer.
    pub fn decode(
        buf: &[u8],
        start: usize,
        message_len: usize,
    ) -> Result<(DnsName, usize), DomainError> {
        let mut reader = WireReader::with_limit(buf, message_len);
        reader.seek(start)?;
        let name = Self::read_name(&mut reader)?;
        Ok((name, reader.position()))
    }

    /// Decode the name at the reader's position and leave the reader at the
    /// offset following it.
    pub fn read_name(reader: &mut WireReader<'_>) -> Result<DnsName, DomainError> {
        let mut cursor = reader.clone();
        let mut labels = Vec::new();
        let mut encoded_len = 1;
        let mut resume_at = None;
        let mut segment_start = cursor.position();
        let mut jumps = 0;

        loop {
            let offset = cursor.position();
            let len = cursor.read_u8()?;

            match len & POINTER_MASK {
                POINTER_MASK => {
                    let low = cursor.read_u8()?;
                    let target = (usize::from(len & !POINTER_MASK) << 8) | usize::from(low);

                    jumps += 1;
                    if target >= segment_start || jumps > cursor.len() {
                        return Err(DomainError::CompressionLoop { offset, target });
                    }
                    if resume_at.is_none() {
                        resume_at = Some(cursor.position());
                    }
                    cursor.seek(target)?;
                    segment_start = target;
                }
                0x00 if len == 0 => break,
                0x00 => {
                    let label = cursor.read_bytes(usize::from(len))?;
                    encoded_len += label.len() + 1;
                    if encoded_len > MAX_NAME_LEN {
                        return Err(DomainError::NameTooLong { len: encoded_len });
                    }
                    labels.push(label.iter().map(|&b| char::from(b)).collect());
                }
                _ => return Err(DomainError::InvalidLabelType { offset, byte: len }),
            }
        }

        reader.seek(resume_at.unwrap_or_else(|| cursor.position()))?;
        Ok(DnsName::from_labels(labels))
    }
}
