use std::cmp::Ordering;

use crate::document::Document;

/// Most recent first; equal dates by ascending id.
///
/// Ids are unique within a corpus, so this is a total order and never
/// depends on input position.
pub fn by_recency(a: &Document, b: &Document) -> Ordering {
    b.issued_on
        .cmp(&a.issued_on)
        .then_with(|| a.id.cmp(&b.id))
}

/// First document under `by_recency`, if any.
pub fn most_recent<'a>(docs: impl IntoIterator<Item = &'a Document>) -> Option<&'a Document> {
    docs.into_iter().min_by(|a, b| by_recency(a, b))
}
