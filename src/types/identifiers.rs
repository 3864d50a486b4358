use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Unique key of a document within a corpus.
///
/// Ordering is plain lexicographic ordering of the underlying string; it is
/// the final tie-break wherever two documents share an issue date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentIdError {
    #[error("Document id must not be empty")]
    Empty,
}

impl DocumentId {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DocumentIdError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DocumentIdError::Empty);
        }
        Ok(DocumentId(trimmed.to_string()))
    }

    /// Registry numbering: the n-th registered document gets id `n`.
    pub fn from_sequence(n: usize) -> Self {
        DocumentId(n.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content fingerprint of a whole corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorpusVersion(String);

impl CorpusVersion {
    /// Hash pre-rendered lines in the order given.
    /// Callers are responsible for a canonical line order.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut hasher = Sha256::new();
        for line in lines {
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        CorpusVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
