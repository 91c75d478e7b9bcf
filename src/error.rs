use strum_macros::Display;
use thiserror::Error;

/// Which half of a name an input error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum NamePart {
    Family,
    Given,
}

#[derive(Error, Debug)]
pub enum SeimeiError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("The {0} name is empty")]
    EmptyNameComponent(NamePart),

    #[error("Unsupported character '{0}'")]
    UnsupportedCharacter(char),

    #[error("Stroke lookup for '{ch}' unavailable: {reason}")]
    LookupUnavailable { ch: char, reason: String },

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("Index {index} is out of range (history holds {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type SeimeiResult<T> = Result<T, SeimeiError>;

impl SeimeiError {
    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
