// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how suggestions get sorted.
//!
//! Scoring policy lives in `core`; this module only composes it with a stable
//! sort. Keeping the two apart means the point table can be tested on its own
//! and the sort can be trusted to be a permutation.
//!
//! Sort order:
//! 1. **Score** - descending, higher wins
//! 2. **Input position** - ascending, so equal scores keep the order the lookup
//!    returned them in

use std::cmp::Ordering;

use tracing::trace;

use super::core::score_candidate;
use crate::contracts::check_ranking;
use crate::types::{Candidate, NormalizedQuery, ScoredCandidate};

/// Compare two scored candidates for ranking.
///
/// Position is compared explicitly even though the sort is stable, so the
/// comparator alone defines a total order.
pub fn compare_scored(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Score every candidate and return them in ranked order, scores attached.
///
/// Borrowed view for callers that want to display scores; see [`rank`] for the
/// owned variant.
pub fn rank_scored<'a>(query: &str, candidates: &'a [Candidate]) -> Vec<ScoredCandidate<'a>> {
    let query = NormalizedQuery::new(query);

    let mut scored: Vec<ScoredCandidate<'a>> = candidates
        .iter()
        .enumerate()
        .map(|(position, candidate)| {
            let score = score_candidate(&query, candidate);
            trace!(target: "rank", name = %candidate.name, score, "scored candidate");
            ScoredCandidate {
                candidate,
                position,
                score,
            }
        })
        .collect();

    // `sort_by` is stable.
    scored.sort_by(compare_scored);

    check_ranking(&scored, candidates.len());
    scored
}

/// Rank candidates by relevance to `query`.
///
/// Returns a new vector holding the same candidates in descending score order;
/// ties keep their input order. The input slice is never reordered. An empty
/// slice yields an empty vector.
///
/// # Example
///
/// ```
/// use rxsuggest::{rank, Candidate};
///
/// let candidates = vec![
///     Candidate::new("Paracetamol", "Acme", 5),
///     Candidate::new("Ibuprofen", "Acme", 0),
///     Candidate::new("Ibuprofen Plus", "Zenith", 20),
/// ];
/// let ranked = rank("ibu", &candidates);
/// let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, ["Ibuprofen Plus", "Ibuprofen", "Paracetamol"]);
/// ```
pub fn rank(query: &str, candidates: &[Candidate]) -> Vec<Candidate> {
    rank_scored(query, candidates)
        .into_iter()
        .map(|scored| scored.candidate.clone())
        .collect()
}
