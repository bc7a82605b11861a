//! Missing-value token matching.

use std::collections::HashSet;

/// Markers treated as missing unless disabled with
/// [`MissingValues::without_common`].
pub const COMMON_MISSING_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>",
    "#N/A", "#NA",
];

/// The set of cell texts that load as missing.
#[derive(Debug, Clone)]
pub struct MissingValues {
    tokens: HashSet<String>,
}

impl Default for MissingValues {
    fn default() -> Self {
        Self {
            tokens: COMMON_MISSING_TOKENS
                .iter()
                .map(|token| (*token).to_string())
                .collect(),
        }
    }
}

impl MissingValues {
    /// Only the empty cell is missing.
    pub fn without_common() -> Self {
        Self {
            tokens: HashSet::from([String::new()]),
        }
    }

    /// Adds a caller-supplied token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.tokens.insert(token.into());
        self
    }

    pub fn is_missing(&self, value: &str) -> bool {
        self.tokens.contains(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_tokens() {
        let missing = MissingValues::default();
        assert!(missing.is_missing(""));
        assert!(missing.is_missing("NA"));
        assert!(missing.is_missing("NaN"));
        assert!(!missing.is_missing("0"));
        assert!(!missing.is_missing("."));
        assert!(!missing.is_missing(" NA"));
    }

    #[test]
    fn test_custom_token() {
        let missing = MissingValues::without_common().with_token("-9");
        assert!(missing.is_missing("-9"));
        assert!(missing.is_missing(""));
        assert!(!missing.is_missing("NA"));
    }
}
