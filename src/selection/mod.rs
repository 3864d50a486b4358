pub mod coverage;
pub mod ordering;
pub mod recency;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::Document;
use crate::types::code::Code;
use crate::types::selection_result::{
	InvalidInput, SelectedDocument, SelectionError, SelectionMetadata, SelectionResult,
	SelectionStrategy, SelectionWhy,
};
pub use coverage::{greedy_cover, GreedyCover, GreedyPick};
pub use ordering::{by_recency, most_recent};
pub use recency::{Clock, FixedClock, Recency, RecencyPredicate, SystemClock};

/// Selector settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
	/// Window used by `select_default`.
	pub recency_days: u32,
}

impl SelectionConfig {
	pub fn v0() -> Self {
		Self { recency_days: 30 }
	}
}

impl Default for SelectionConfig {
	fn default() -> Self {
		Self::v0()
	}
}

pub struct DocumentSelector<C> {
	clock: C,
	config: SelectionConfig,
}

impl Default for DocumentSelector<SystemClock> {
	fn default() -> Self {
		Self {
			clock: SystemClock,
			config: SelectionConfig::v0(),
		}
	}
}

impl<C> DocumentSelector<C>
where
	C: Clock,
{
	pub fn new(clock: C, config: SelectionConfig) -> Self {
		Self { clock, config }
	}

	pub fn config(&self) -> &SelectionConfig {
		&self.config
	}

	/// Select with the configured day window.
	pub fn select_default<S: AsRef<str>>(
		&self,
		requested: &[S],
		corpus: &[Document],
	) -> Result<SelectionResult, SelectionError> {
		self.select(requested, corpus, &Recency::Days(self.config.recency_days))
	}

	pub fn select<S: AsRef<str>>(
		&self,
		requested: &[S],
		corpus: &[Document],
		recency: &Recency,
	) -> Result<SelectionResult, SelectionError> {
		// 0. Validation; the clock is read exactly once per call
		let requested = normalize_request(requested)?;
		let reference_date = self.clock.today();
		let window = recency.resolve(reference_date);

		let mut metadata = SelectionMetadata {
			requested_codes: requested.clone(),
			strategy: SelectionStrategy::EmptyRequest,
			reference_date,
			recency_threshold: window.threshold(),
			documents_considered: corpus.len(),
			recent_documents: 0,
			documents_selected: 0,
			greedy_rounds: 0,
		};

		if requested.is_empty() {
			return Ok(SelectionResult {
				documents: Vec::new(),
				uncovered_codes: Vec::new(),
				selection: metadata,
			});
		}

		validate_corpus(corpus)?;

		// 1. Recent full cover
		let recent: Vec<&Document> = corpus.iter().filter(|doc| window.is_recent(doc)).collect();
		metadata.recent_documents = recent.len();

		if let Some(doc) = most_recent(recent.iter().copied().filter(|doc| doc.covers_all(&requested))) {
			debug!(document = %doc.id, recent = recent.len(), "Recent full cover");
			return Ok(full_cover(doc, requested, SelectionStrategy::RecentFullCover, metadata));
		}

		// 2. Global full cover
		if let Some(doc) = most_recent(corpus.iter().filter(|doc| doc.covers_all(&requested))) {
			debug!(document = %doc.id, "Global full cover");
			return Ok(full_cover(doc, requested, SelectionStrategy::GlobalFullCover, metadata));
		}

		// 3. Greedy multi-document cover
		let GreedyCover { picks, uncovered } = greedy_cover(&requested, corpus);

		let mut documents: Vec<SelectedDocument> = picks
			.iter()
			.enumerate()
			.map(|(i, pick)| SelectedDocument {
				document: pick.document.clone(),
				why: SelectionWhy {
					matched_codes: pick.document.matching_codes(&requested),
					newly_covered: pick.newly_covered.iter().map(|&c| requested[c].clone()).collect(),
					pick: i + 1,
				},
			})
			.collect();

		// Presentation order, not pick order
		documents.sort_by(|a, b| by_recency(&a.document, &b.document));

		let uncovered_codes: Vec<Code> = uncovered.iter().map(|&c| requested[c].clone()).collect();

		debug!(
			rounds = picks.len(),
			uncovered = uncovered_codes.len(),
			"Greedy cover"
		);

		metadata.strategy = SelectionStrategy::Greedy;
		metadata.greedy_rounds = picks.len();
		metadata.documents_selected = documents.len();

		Ok(SelectionResult {
			documents,
			uncovered_codes,
			selection: metadata,
		})
	}
}

/// Select with the host's local date as "today".
pub fn select_documents<S: AsRef<str>>(
	requested: &[S],
	corpus: &[Document],
	recency: &Recency,
) -> Result<SelectionResult, SelectionError> {
	DocumentSelector::default().select(requested, corpus, recency)
}

/// Parse and de-duplicate requested codes, keeping first occurrences.
fn normalize_request<S: AsRef<str>>(requested: &[S]) -> Result<Vec<Code>, InvalidInput> {
	let mut seen = BTreeSet::new();
	let mut codes = Vec::with_capacity(requested.len());

	for (position, raw) in requested.iter().enumerate() {
		let code = Code::new(raw).map_err(|source| InvalidInput::InvalidCode { position, source })?;
		if seen.insert(code.clone()) {
			codes.push(code);
		}
	}
	Ok(codes)
}

fn validate_corpus(corpus: &[Document]) -> Result<(), InvalidInput> {
	let mut ids = BTreeSet::new();
	for doc in corpus {
		if !ids.insert(&doc.id) {
			return Err(InvalidInput::DuplicateDocumentId(doc.id.clone()));
		}
		if doc.codes.is_empty() {
			return Err(InvalidInput::DocumentWithoutCodes(doc.id.clone()));
		}
	}
	Ok(())
}

fn full_cover(
	doc: &Document,
	requested: Vec<Code>,
	strategy: SelectionStrategy,
	mut metadata: SelectionMetadata,
) -> SelectionResult {
	metadata.strategy = strategy;
	metadata.documents_selected = 1;

	SelectionResult {
		documents: vec![SelectedDocument {
			document: doc.clone(),
			why: SelectionWhy {
				matched_codes: requested.clone(),
				newly_covered: requested,
				pick: 1,
			},
		}],
		uncovered_codes: Vec::new(),
		selection: metadata,
	}
}
