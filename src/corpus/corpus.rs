// In-memory only: the registry never writes anything back.

use std::collections::BTreeSet;
use std::fs;
use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::document::{Document, DocumentError, DocumentRecord};
use crate::types::identifiers::{CorpusVersion, DocumentId, DocumentIdError};

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Duplicate document ID: {0}")]
    DuplicateDocumentId(DocumentId),
    #[error("Invalid document ID at position {position}: {source}")]
    InvalidId {
        position: usize,
        source: DocumentIdError,
    },
    #[error("Invalid document at position {position}: {source}")]
    Document {
        position: usize,
        source: DocumentError,
    },
}

/// A flat, registration-ordered list of documents with unique ids.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    ids: BTreeSet<DocumentId>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.iter().find(|doc| &doc.id == id)
    }

    pub fn insert(&mut self, document: Document) -> Result<(), CorpusError> {
        if !self.ids.insert(document.id.clone()) {
            return Err(CorpusError::DuplicateDocumentId(document.id));
        }
        self.documents.push(document);
        Ok(())
    }

    /// Register an uploaded record.
    ///
    /// Records without an id get the first free number from `len + 1` on.
    pub fn register(&mut self, record: DocumentRecord) -> Result<DocumentId, CorpusError> {
        let position = self.documents.len() + 1;
        let id = self.resolve_id(&record, position)?;
        let document = Document::ingest(id.clone(), record)
            .map_err(|source| CorpusError::Document { position, source })?;
        self.insert(document)?;
        Ok(id)
    }

    /// Load a JSON array of records.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, CorpusError> {
        let records: Vec<DocumentRecord> = serde_json::from_reader(reader)?;

        let mut corpus = Corpus::new();
        for record in records {
            corpus.register(record)?;
        }
        Ok(corpus)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CorpusError> {
        let f = fs::File::open(path)?;
        let corpus = Self::from_json_reader(std::io::BufReader::new(f))?;
        info!(
            path = %path.display(),
            documents = corpus.len(),
            "Loaded document corpus"
        );
        Ok(corpus)
    }

    /// Fingerprint of the corpus content, independent of registration order.
    pub fn version(&self) -> CorpusVersion {
        let mut sorted: Vec<&Document> = self.documents.iter().collect();
        sorted.sort_by(|a, b| a.id.cmp(&b.id));

        let lines: Vec<String> = sorted.iter().map(|doc| doc.fingerprint_line()).collect();
        CorpusVersion::from_lines(lines.iter().map(String::as_str))
    }

    fn resolve_id(&self, record: &DocumentRecord, position: usize) -> Result<DocumentId, CorpusError> {
        match &record.id {
            Some(raw) => raw
                .to_document_id()
                .map_err(|source| CorpusError::InvalidId { position, source }),
            None => Ok(self.next_free_id(position)),
        }
    }

    fn next_free_id(&self, start: usize) -> DocumentId {
        let mut n = start;
        loop {
            let id = DocumentId::from_sequence(n);
            if !self.ids.contains(&id) {
                return id;
            }
            n += 1;
        }
    }
}
