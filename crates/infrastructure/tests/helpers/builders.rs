/// Assembles reply datagrams for a query, echoing its ID and question.
pub struct ReplyBuilder {
    id: u16,
    rcode: u8,
    question: Vec<u8>,
    answers: Vec<Vec<u8>>,
}

impl ReplyBuilder {
    /// Start from the query bytes: ID and question section are copied over.
    pub fn for_query(query: &[u8]) -> Self {
        let id = u16::from_be_bytes([query[0], query[1]]);
        Self {
            id,
            rcode: 0,
            question: query[12..].to_vec(),
            answers: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.rcode = rcode;
        self
    }

    /// Answer record owned by the question name (pointer to offset 12).
    pub fn answer(mut self, rtype: u16, rdata: &[u8]) -> Self {
        let mut rr = vec![0xC0, 0x0C];
        rr.extend_from_slice(&rtype.to_be_bytes());
        rr.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x3C]);
        rr.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        rr.extend_from_slice(rdata);
        self.answers.push(rr);
        self
    }

    pub fn a(self, octets: [u8; 4]) -> Self {
        self.answer(1, &octets)
    }

    pub fn build(self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.push(0x81);
        buf.push(0x80 | (self.rcode & 0x0F));
        buf.extend_from_slice(&[0x00, 0x01]);
        buf.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
        buf.extend_from_slice(&self.question);
        for rr in &self.answers {
            buf.extend_from_slice(rr);
        }
        buf
    }
}
