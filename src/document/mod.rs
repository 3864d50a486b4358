pub mod document;
pub mod record;

pub use crate::types::identifiers::DocumentId;
pub use document::{Document, DocumentError, Payload};
pub use record::{DocumentRecord, RecordCodes, RecordId};
