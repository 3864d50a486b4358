use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator used when several codes share one document field.
pub const CODE_SEPARATOR: char = ',';

/// An opaque requirement identifier, e.g. `A1`.
///
/// Codes are compared exactly: no case folding, no normalization beyond
/// trimming surrounding whitespace at construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeError {
    #[error("Code must not be empty")]
    Empty,
    #[error("Code must not contain the separator ',': {0:?}")]
    ContainsSeparator(String),
}

impl Code {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CodeError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CodeError::Empty);
        }
        if trimmed.contains(CODE_SEPARATOR) {
            return Err(CodeError::ContainsSeparator(trimmed.to_string()));
        }
        Ok(Code(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Code {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Code::new(value)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split a document's code field (`"A1, A2"`) into codes.
/// Empty segments are dropped.
pub fn parse_code_field(field: &str) -> Result<Vec<Code>, CodeError> {
    field
        .split(CODE_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Code::new)
        .collect()
}

/// Parse a column pasted from a spreadsheet: one code per line, only the
/// first tab-separated cell of each line counts, blank lines are skipped.
pub fn parse_code_column(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.split('\t').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_field_splits_and_trims() {
        let codes = parse_code_field(" A1, A2,,A3 ").unwrap();
        let raw: Vec<&str> = codes.iter().map(Code::as_str).collect();
        assert_eq!(raw, vec!["A1", "A2", "A3"]);
    }

    #[test]
    fn code_column_keeps_first_cell_only() {
        let pasted = "A1\tqty 3\n\nB7\t\n  C2  \r\n";
        assert_eq!(parse_code_column(pasted), vec!["A1", "B7", "C2"]);
    }

    #[test]
    fn code_rejects_blank_and_separator() {
        assert_eq!(Code::new("   "), Err(CodeError::Empty));
        assert!(matches!(Code::new("A1,A2"), Err(CodeError::ContainsSeparator(_))));
        assert_eq!(Code::new(" a1 ").unwrap().as_str(), "a1");
    }
}
