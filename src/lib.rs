//! Deterministic document selection for code coverage.
//!
//! `docutrack-core` takes a flat corpus of dated documents, each tagged with
//! one or more codes, and picks the smallest reasonable set of documents that
//! together hold every requested code. A single recent document is preferred,
//! then a single document from the full history, then a greedy multi-document
//! cover. All operations are deterministic: identical inputs always produce
//! identical outputs.

pub mod corpus;
pub mod document;
pub mod selection;
pub mod types;

pub use selection::select_documents;
