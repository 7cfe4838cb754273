//! Ranking property tests.
//!
//! These tests verify the ordering guarantees for arbitrary inputs:
//! - Scores never exceed MAX_SCORE
//! - Output is sorted by score, ties keep input order
//! - An exact name match outranks any candidate that only prefix-matches
//! - Ranking never drops or invents candidates

use proptest::prelude::*;
use rxsuggest::{
    rank, rank_scored, score_candidate, Candidate, NormalizedQuery, MAX_SCORE,
};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabet so that prefix and contains matches are common.
fn candidate_strategy() -> impl Strategy<Value = Candidate> {
    ("[abAB ]{0,6}", "[abAB]{0,4}", prop_oneof![Just(0u32), 0u32..50, Just(u32::MAX)])
        .prop_map(|(name, label, qty)| Candidate::new(name, label, qty))
}

fn candidates_strategy() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec(candidate_strategy(), 0..16)
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_score_is_bounded(
        query in "[abAB ]{0,4}",
        candidate in candidate_strategy(),
    ) {
        let score = score_candidate(&NormalizedQuery::new(&query), &candidate);
        prop_assert!(score <= MAX_SCORE);
    }

    #[test]
    fn prop_output_sorted_and_stable(
        query in "[ab]{1,3}",
        candidates in candidates_strategy(),
    ) {
        let ranked = rank_scored(&query, &candidates);
        prop_assert_eq!(ranked.len(), candidates.len());

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].position < pair[1].position);
            }
        }
    }

    #[test]
    fn prop_positions_are_a_permutation(
        query in "[ab]{1,3}",
        candidates in candidates_strategy(),
    ) {
        let mut positions: Vec<usize> = rank_scored(&query, &candidates)
            .iter()
            .map(|s| s.position)
            .collect();
        positions.sort_unstable();
        prop_assert_eq!(positions, (0..candidates.len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_exact_outranks_prefix_only(
        query in "[ab]{1,3}",
        suffix in "[ab]{1,3}",
        exact_qty in 0u32..5,
        prefix_qty in 0u32..1000,
        exact_first in any::<bool>(),
    ) {
        let exact = Candidate::new(query.to_uppercase(), "", exact_qty);
        let prefix = Candidate::new(format!("{query}{suffix}"), query.clone(), prefix_qty);
        let input = if exact_first {
            vec![exact.clone(), prefix]
        } else {
            vec![prefix, exact.clone()]
        };

        prop_assert_eq!(&rank(&query, &input)[0], &exact);
    }

    #[test]
    fn prop_surrounding_whitespace_is_ignored(
        query in "[ab]{1,3}",
        candidates in candidates_strategy(),
    ) {
        prop_assert_eq!(rank(&query, &candidates), rank(&format!("  {query}\t"), &candidates));
    }
}

#[test]
fn empty_input_ranks_to_empty() {
    assert!(rank("anything", &[]).is_empty());
    assert!(rank_scored("", &[]).is_empty());
}
