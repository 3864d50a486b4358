use serde::{Deserialize, Serialize};

use crate::types::code::{parse_code_field, Code, CodeError};
use crate::types::identifiers::{DocumentId, DocumentIdError};

/// Record ids arrive either as numbers (`1`) or as names (`"manifest-03"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl RecordId {
    pub fn to_document_id(&self) -> Result<DocumentId, DocumentIdError> {
        match self {
            RecordId::Number(n) => DocumentId::new(n.to_string()),
            RecordId::Text(s) => DocumentId::new(s),
        }
    }
}

/// Codes arrive either as a single separated field (`"A1, A2"`) or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordCodes {
    List(Vec<String>),
    Field(String),
}

impl Default for RecordCodes {
    fn default() -> Self {
        RecordCodes::List(Vec::new())
    }
}

impl RecordCodes {
    pub fn into_codes(self) -> Result<Vec<Code>, CodeError> {
        match self {
            RecordCodes::Field(field) => parse_code_field(&field),
            RecordCodes::List(entries) => {
                let mut codes = Vec::with_capacity(entries.len());
                for entry in &entries {
                    codes.extend(parse_code_field(entry)?);
                }
                Ok(codes)
            }
        }
    }
}

/// Ingestion wire form of a document, as produced by upload forms and JSON
/// exports. Validation happens in `Document::ingest`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(default, alias = "name", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub date: String,
    #[serde(alias = "code")]
    pub codes: RecordCodes,
    #[serde(default, alias = "docNumber")]
    pub doc_number: String,
    #[serde(default, alias = "pdfName")]
    pub file_name: String,
}
