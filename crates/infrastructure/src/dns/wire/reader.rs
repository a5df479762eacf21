use ferrous_lookup_domain::DomainError;

/// Bounds-checked big-endian cursor over a received message.
///
/// Every read is checked against the message length; running off the end
/// is reported as `TruncatedMessage` rather than panicking.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Reader limited to the first `message_len` bytes of `buf`.
    pub fn with_limit(buf: &'a [u8], message_len: usize) -> Self {
        Self::new(&buf[..message_len.min(buf.len())])
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn message(&self) -> &'a [u8] {
        self.buf
    }

    pub fn seek(&mut self, pos: usize) -> Result<(), DomainError> {
        if pos > self.buf.len() {
            return Err(self.truncated(pos, 0));
        }
        self.pos = pos;
        Ok(())
    }

    pub fn skip(&mut self, n: usize) -> Result<(), DomainError> {
        self.read_bytes(n).map(|_| ())
    }

    pub fn peek_u8(&self) -> Result<u8, DomainError> {
        self.buf
            .get(self.pos)
            .copied()
            .ok_or_else(|| self.truncated(self.pos, 1))
    }

    pub fn read_u8(&mut self) -> Result<u8, DomainError> {
        let byte = self.peek_u8()?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> Result<u16, DomainError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, DomainError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DomainError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| self.truncated(self.pos, n))?;
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn truncated(&self, offset: usize, needed: usize) -> DomainError {
        DomainError::TruncatedMessage {
            offset,
            needed,
            len: self.buf.len(),
        }
    }
}
