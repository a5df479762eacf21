use std::fmt;

/// Record types this client can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueryType {
    #[default]
    A,
    NS,
    MX,
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::A => "A",
            QueryType::NS => "NS",
            QueryType::MX => "MX",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            QueryType::A => 1,
            QueryType::NS => 2,
            QueryType::MX => 15,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(QueryType::A),
            2 => Some(QueryType::NS),
            15 => Some(QueryType::MX),
            _ => None,
        }
    }

    /// Human label used when reporting the echoed question type.
    pub fn response_label(&self) -> &'static str {
        match self {
            QueryType::A => "Type-A response",
            QueryType::NS => "Type-NS response",
            QueryType::MX => "Type-MX response",
        }
    }

    /// Picks the type from the mutually exclusive `mx`/`ns` switches.
    pub fn from_flags(mx: bool, ns: bool) -> Self {
        if mx {
            QueryType::MX
        } else if ns {
            QueryType::NS
        } else {
            QueryType::A
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
