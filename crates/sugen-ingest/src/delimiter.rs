//! Field delimiter parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::IngestError;

/// How fields on a line are separated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delimiter {
    /// A single ASCII byte; quoted fields are honoured.
    Byte(u8),
    /// Runs of whitespace; leading and trailing whitespace is ignored and
    /// double-quoted fields may contain whitespace.
    Whitespace,
    /// A short string (or a non-ASCII character) matched literally. Quotes
    /// carry no meaning.
    Literal(String),
}

impl Delimiter {
    pub const TAB: Self = Self::Byte(b'\t');
    pub const SPACE: Self = Self::Byte(b' ');
    pub const COMMA: Self = Self::Byte(b',');
}

impl FromStr for Delimiter {
    type Err = IngestError;

    /// Accepts a single ASCII character, the aliases `\t`, `tab` and `space`,
    /// `\s+` / `whitespace` for whitespace-separated input, or any other
    /// string as a literal separator.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &'static str| IngestError::InvalidDelimiter {
            value: value.to_string(),
            reason,
        };
        match value {
            "" => Err(invalid("delimiter must not be empty")),
            "\\t" | "tab" => Ok(Self::TAB),
            "space" => Ok(Self::SPACE),
            "\\s+" | "whitespace" => Ok(Self::Whitespace),
            _ if value.contains(['\n', '\r', '"']) => {
                Err(invalid("line breaks and quotes cannot separate fields"))
            }
            _ => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.is_ascii() => Ok(Self::Byte(ch as u8)),
                    _ => Ok(Self::Literal(value.to_string())),
                }
            }
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(b'\t') => f.write_str("\\t"),
            Self::Byte(byte) => write!(f, "{}", char::from(*byte)),
            Self::Whitespace => f.write_str("\\s+"),
            Self::Literal(separator) => f.write_str(separator),
        }
    }
}
