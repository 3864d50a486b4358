use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::record::DocumentRecord;
use crate::types::code::{Code, CodeError};
use crate::types::identifiers::DocumentId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Invalid issue date {value:?}: expected YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("Document must carry at least one code")]
    NoCodes,
    #[error("Invalid code: {0}")]
    InvalidCode(#[from] CodeError),
}

/// Opaque fields carried through selection unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Payload {
    pub doc_number: String,
    pub file_name: String,
}

/// A dated record tagged with one or more codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub issued_on: NaiveDate,
    pub codes: BTreeSet<Code>,
    pub payload: Payload,
}

impl Document {
    /// Build a document from already-validated parts.
    ///
    /// Duplicate codes collapse; an empty code set is rejected.
    pub fn new(
        id: DocumentId,
        issued_on: NaiveDate,
        codes: impl IntoIterator<Item = Code>,
        payload: Payload,
    ) -> Result<Self, DocumentError> {
        let codes: BTreeSet<Code> = codes.into_iter().collect();
        if codes.is_empty() {
            return Err(DocumentError::NoCodes);
        }

        Ok(Document {
            id,
            issued_on,
            codes,
            payload,
        })
    }

    /// Ingest a raw record into a Document.
    ///
    /// The record's own id, if any, is ignored: identity is assigned by the
    /// caller so that the corpus stays in control of uniqueness.
    pub fn ingest(id: DocumentId, record: DocumentRecord) -> Result<Self, DocumentError> {
        let issued_on = parse_issue_date(&record.date)?;
        let codes = record.codes.into_codes()?;

        Document::new(
            id,
            issued_on,
            codes,
            Payload {
                doc_number: record.doc_number,
                file_name: record.file_name,
            },
        )
    }

    pub fn holds(&self, code: &Code) -> bool {
        self.codes.contains(code)
    }

    /// True when every code in `codes` is held. Vacuously true for no codes.
    pub fn covers_all(&self, codes: &[Code]) -> bool {
        codes.iter().all(|code| self.holds(code))
    }

    /// Requested codes this document holds, in the order given.
    pub fn matching_codes(&self, codes: &[Code]) -> Vec<Code> {
        codes.iter().filter(|code| self.holds(code)).cloned().collect()
    }

    /// Canonical one-line rendering used for corpus fingerprints.
    pub(crate) fn fingerprint_line(&self) -> String {
        let codes: Vec<&str> = self.codes.iter().map(Code::as_str).collect();
        format!(
            "{}|{}|{}|{}|{}",
            self.id,
            self.issued_on.format("%Y-%m-%d"),
            codes.join(","),
            self.payload.doc_number,
            self.payload.file_name,
        )
    }
}

/// Dates are calendar dates. A full RFC 3339 timestamp is accepted and
/// truncated to its date.
fn parse_issue_date(value: &str) -> Result<NaiveDate, DocumentError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| DocumentError::InvalidDate {
            value: value.to_string(),
        })
}
