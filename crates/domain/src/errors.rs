use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Label too long: {len} bytes (maximum 63)")]
    LabelTooLong { len: usize },

    #[error("Empty label in domain name")]
    EmptyLabel,

    #[error("Domain name too long: {len} bytes (maximum 255)")]
    NameTooLong { len: usize },

    #[error("Truncated message: need {needed} bytes at offset {offset}, message is {len} bytes")]
    TruncatedMessage {
        offset: usize,
        needed: usize,
        len: usize,
    },

    #[error("Compression loop: pointer at offset {offset} targets {target}")]
    CompressionLoop { offset: usize, target: usize },

    #[error("Invalid label type 0x{byte:02x} at offset {offset}")]
    InvalidLabelType { offset: usize, byte: u8 },

    #[error("Invalid RDATA for type {record_type}: {reason}")]
    InvalidRdata {
        record_type: u16,
        reason: &'static str,
    },

    #[error("Echoed question mismatch: expected type {expected}, got type {got} class {class}")]
    QuestionMismatch { expected: u16, got: u16, class: u16 },

    #[error("Query timeout")]
    QueryTimeout,

    #[error("I/O error: {0}")]
    Io(String),

    #[error("No response received after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },
}

impl DomainError {
    /// True for errors raised while decoding a reply that does not follow the
    /// wire format.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            DomainError::TruncatedMessage { .. }
                | DomainError::LabelTooLong { .. }
                | DomainError::EmptyLabel
                | DomainError::NameTooLong { .. }
                | DomainError::CompressionLoop { .. }
                | DomainError::InvalidLabelType { .. }
                | DomainError::InvalidRdata { .. }
                | DomainError::QuestionMismatch { .. }
        )
    }

    /// Errors that end a single attempt but leave the exchange retryable.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::QueryTimeout | DomainError::Io(_))
    }
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Io(e.to_string())
    }
}
