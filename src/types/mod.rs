pub mod code;
pub mod identifiers;
pub mod selection_result;

pub use code::{parse_code_column, parse_code_field, Code, CodeError};
pub use identifiers::{CorpusVersion, DocumentId, DocumentIdError};
pub use selection_result::{
    InvalidInput, SelectedDocument, SelectionError, SelectionMetadata, SelectionResult,
    SelectionStrategy, SelectionWhy,
};
