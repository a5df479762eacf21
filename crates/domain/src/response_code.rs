use std::fmt;

/// The 4-bit RCODE carried in the low nibble of header byte 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Unknown(u8),
}

impl ResponseCode {
    pub fn from_u8(code: u8) -> Self {
        match code & 0x0F {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            other => ResponseCode::Unknown(other),
        }
    }

    pub fn to_u8(&self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NXDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Unknown(code) => *code,
        }
    }

    /// Codes outside 1..=5 pass through as success.
    pub fn is_valid(&self) -> bool {
        self.message().is_none()
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            ResponseCode::FormErr => {
                Some("Format error: the name server was unable to interpret the query")
            }
            ResponseCode::ServFail => Some(
                "Server failure: the name server was unable to process this query \
                 due to a problem with the name server",
            ),
            ResponseCode::NXDomain => Some(
                "Name error: meaningful only for responses from an authoritative name server, \
                 this code signifies that the domain name referenced in the query does not exist",
            ),
            ResponseCode::NotImp => Some(
                "Not implemented: the name server does not support the requested kind of query",
            ),
            ResponseCode::Refused => Some(
                "Refused: the name server refuses to perform the requested operation \
                 for policy reasons",
            ),
            ResponseCode::NoError | ResponseCode::Unknown(_) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Unknown(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Unknown(code) => write!(f, "UNKNOWN({})", code),
            other => f.write_str(other.as_str()),
        }
    }
}
