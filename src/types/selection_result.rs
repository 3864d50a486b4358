use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::types::code::{Code, CodeError};
use crate::types::identifiers::DocumentId;

/// Which step of the pipeline produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Nothing was requested; no work done.
    EmptyRequest,
    /// A single recent document holds every requested code.
    RecentFullCover,
    /// A single document from the whole corpus holds every requested code.
    GlobalFullCover,
    /// Several documents were assembled greedily.
    Greedy,
}

/// A selected document returned in the output.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedDocument {
    pub document: Document,
    pub why: SelectionWhy,
}

/// Explanation for why a document was selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionWhy {
    /// Requested codes this document holds, in request order.
    pub matched_codes: Vec<Code>,
    /// Requested codes first covered by this document, in request order.
    pub newly_covered: Vec<Code>,
    /// 1-based position in which the document was picked.
    pub pick: usize,
}

/// Metadata describing the outcome of the selection process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionMetadata {
    /// Requested codes after de-duplication, in request order.
    pub requested_codes: Vec<Code>,
    pub strategy: SelectionStrategy,

    pub reference_date: NaiveDate,
    /// Earliest issue date counted as recent. Absent for predicate windows.
    pub recency_threshold: Option<NaiveDate>,

    pub documents_considered: usize,
    pub recent_documents: usize,
    pub documents_selected: usize,
    pub greedy_rounds: usize,
}

/// The final result of a selection call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Most recent first; equal dates ordered by ascending id.
    pub documents: Vec<SelectedDocument>,
    /// Requested codes no document in the corpus holds, in request order.
    pub uncovered_codes: Vec<Code>,
    pub selection: SelectionMetadata,
}

impl SelectionResult {
    pub fn is_fully_covered(&self) -> bool {
        self.uncovered_codes.is_empty()
    }

    pub fn document_ids(&self) -> Vec<&DocumentId> {
        self.documents.iter().map(|s| &s.document.id).collect()
    }

    /// Requested codes covered by the selection, in request order.
    pub fn covered_codes(&self) -> Vec<&Code> {
        self.selection
            .requested_codes
            .iter()
            .filter(|code| !self.uncovered_codes.contains(code))
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Contract violations detected before any selection work.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("Requested code at position {position} is invalid: {source}")]
    InvalidCode { position: usize, source: CodeError },

    #[error("Duplicate document id in corpus: {0}")]
    DuplicateDocumentId(DocumentId),

    #[error("Document {0} carries no codes")]
    DocumentWithoutCodes(DocumentId),
}
