//! Runtime contracts for ranking output.
//!
//! Debug-mode assertions that the ranker and the widget state keep their
//! promises. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//!
//! # Contracts
//!
//! | Contract Function        | Property                                          |
//! |--------------------------|---------------------------------------------------|
//! | `check_ranking`          | Output is a permutation, sorted by score, stable  |
//! | `check_focus_in_bounds`  | Widget focus never points past the suggestions    |
//! | `check_exact_beats_prefix` | Point table keeps exact above prefix-only       |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

use crate::scoring::{
    EXACT_NAME_SCORE, IN_STOCK_SCORE, LABEL_CONTAINS_SCORE, LABEL_PREFIX_SCORE,
    MAX_QUANTITY_BONUS, NAME_CONTAINS_SCORE, NAME_PREFIX_SCORE,
};
use crate::types::ScoredCandidate;

/// Worst exact name match: only the name rules fire.
const WORST_EXACT: u32 = EXACT_NAME_SCORE + NAME_PREFIX_SCORE + NAME_CONTAINS_SCORE;

/// Best candidate whose name only starts with the query.
const BEST_PREFIX_ONLY: u32 = NAME_PREFIX_SCORE
    + NAME_CONTAINS_SCORE
    + LABEL_PREFIX_SCORE
    + LABEL_CONTAINS_SCORE
    + IN_STOCK_SCORE
    + MAX_QUANTITY_BONUS;

// Exact name match beats any prefix-only match: 1700 > 1160.
const _: () = assert!(WORST_EXACT > BEST_PREFIX_ONLY);

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that a ranking is a stable, score-descending permutation of its input.
///
/// # Panics (debug builds only)
/// Panics if the length differs from `input_len`, a position repeats or is out
/// of range, scores increase, or equal scores are out of input order.
#[inline]
pub fn check_ranking(ranked: &[ScoredCandidate<'_>], input_len: usize) {
    debug_assert_eq!(
        ranked.len(),
        input_len,
        "Contract violation: ranking length {} != input length {}",
        ranked.len(),
        input_len
    );

    if cfg!(debug_assertions) {
        let mut seen = vec![false; input_len];
        for (i, entry) in ranked.iter().enumerate() {
            debug_assert!(
                entry.position < input_len && !seen[entry.position],
                "Contract violation: ranked[{}].position {} is out of range or repeated",
                i,
                entry.position
            );
            if entry.position < input_len {
                seen[entry.position] = true;
            }
        }
    }

    for i in 1..ranked.len() {
        let prev = &ranked[i - 1];
        let curr = &ranked[i];
        debug_assert!(
            prev.score > curr.score || (prev.score == curr.score && prev.position < curr.position),
            "Contract violation: ranked[{}] (score {}, pos {}) before ranked[{}] (score {}, pos {})",
            i - 1,
            prev.score,
            prev.position,
            i,
            curr.score,
            curr.position
        );
    }
}

// ============================================================================
// WIDGET CONTRACTS
// ============================================================================

/// Check that a focus index points at an existing suggestion.
#[inline]
pub fn check_focus_in_bounds(focus: Option<usize>, len: usize) {
    if let Some(index) = focus {
        debug_assert!(
            index < len,
            "Contract violation: focus {} >= suggestions.len() {}",
            index,
            len
        );
    }
}

/// Check the exact-beats-prefix property of the point table.
///
/// Redundant with the compile-time assertion; kept for test visibility.
#[inline]
pub fn check_exact_beats_prefix() {
    debug_assert!(
        WORST_EXACT > BEST_PREFIX_ONLY,
        "Contract violation: worst exact match {} <= best prefix-only match {}",
        WORST_EXACT,
        BEST_PREFIX_ONLY
    );
}
