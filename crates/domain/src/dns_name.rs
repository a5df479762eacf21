use crate::DomainError;
use std::fmt;
use std::str::FromStr;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

/// A domain name held as its ordered labels.
///
/// The root name has no labels and renders as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DnsName {
    labels: Vec<String>,
}

impl DnsName {
    pub fn root() -> Self {
        Self::default()
    }

    /// Builds a name from labels that were already read off the wire.
    pub fn from_labels(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Size of the uncompressed wire form, terminating zero byte included.
    pub fn encoded_len(&self) -> usize {
        self.labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        for label in &self.labels {
            if label.is_empty() {
                return Err(DomainError::EmptyLabel);
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::LabelTooLong { len: label.len() });
            }
        }
        let len = self.encoded_len();
        if len > MAX_NAME_LEN {
            return Err(DomainError::NameTooLong { len });
        }
        Ok(())
    }
}

impl fmt::Display for DnsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels.join("."))
    }
}

impl FromStr for DnsName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);

        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName(s.to_string()));
        }
        if !trimmed.is_ascii() {
            return Err(DomainError::InvalidDomainName(format!(
                "{}: only ASCII names are supported",
                s
            )));
        }

        let name = DnsName {
            labels: trimmed.split('.').map(str::to_string).collect(),
        };
        name.validate()?;
        Ok(name)
    }
}
