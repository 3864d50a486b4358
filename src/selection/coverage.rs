use std::cmp::Ordering;

use tracing::debug;

use super::ordering::by_recency;
use crate::document::Document;
use crate::types::code::Code;

pub struct GreedyPick<'a> {
    pub document: &'a Document,
    /// Indices into the requested codes first covered by this pick.
    pub newly_covered: Vec<usize>,
}

pub struct GreedyCover<'a> {
    /// In pick order.
    pub picks: Vec<GreedyPick<'a>>,
    /// Indices into the requested codes no pick covered.
    pub uncovered: Vec<usize>,
}

/// Greedy set cover over `corpus`.
///
/// Each round takes the document holding the most still-uncovered codes,
/// ties going to `by_recency`. Stops when everything is covered or no
/// remaining document holds an uncovered code. `requested` must be free of
/// duplicates.
pub fn greedy_cover<'a>(requested: &[Code], corpus: &'a [Document]) -> GreedyCover<'a> {
    // Only documents holding at least one requested code can ever be picked.
    let mut candidates: Vec<(&'a Document, Vec<usize>)> = corpus
        .iter()
        .filter_map(|doc| {
            let held: Vec<usize> = requested
                .iter()
                .enumerate()
                .filter(|(_, code)| doc.holds(code))
                .map(|(i, _)| i)
                .collect();
            (!held.is_empty()).then_some((doc, held))
        })
        .collect();

    let mut remaining = vec![true; requested.len()];
    let mut remaining_count = requested.len();
    let mut picks = Vec::new();

    while remaining_count > 0 {
        let mut best: Option<(usize, usize)> = None;

        for (idx, (doc, held)) in candidates.iter().enumerate() {
            let gain = held.iter().filter(|&&i| remaining[i]).count();
            if gain == 0 {
                continue;
            }
            let better = match best {
                None => true,
                Some((best_idx, best_gain)) => {
                    gain > best_gain
                        || (gain == best_gain
                            && by_recency(doc, candidates[best_idx].0) == Ordering::Less)
                }
            };
            if better {
                best = Some((idx, gain));
            }
        }

        let Some((idx, _)) = best else {
            break;
        };

        // The choice never depends on candidate position.
        let (document, held) = candidates.swap_remove(idx);
        let newly_covered: Vec<usize> = held.into_iter().filter(|&i| remaining[i]).collect();
        for &i in &newly_covered {
            remaining[i] = false;
        }
        remaining_count -= newly_covered.len();

        debug!(
            document = %document.id,
            newly_covered = newly_covered.len(),
            remaining = remaining_count,
            "Greedy pick"
        );

        picks.push(GreedyPick {
            document,
            newly_covered,
        });
    }

    debug_assert!(picks.len() <= corpus.len());

    let uncovered = remaining
        .iter()
        .enumerate()
        .filter(|(_, open)| **open)
        .map(|(i, _)| i)
        .collect();

    GreedyCover { picks, uncovered }
}
