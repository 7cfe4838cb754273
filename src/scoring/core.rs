// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind suggestion relevance.
//!
//! Every rule that applies adds its points; nothing is mutually exclusive. An
//! exact name match therefore also collects the starts-with and contains
//! bonuses, which gives a smooth gradient instead of hard tiers.
//!
//! # Point table
//!
//! | Rule (case-insensitive)            | Points |
//! |------------------------------------|--------|
//! | name equals query                  | 1000   |
//! | name starts with query             | 500    |
//! | secondary label starts with query  | 300    |
//! | name contains query                | 200    |
//! | secondary label contains query     | 100    |
//! | quantity > 0                       | 50     |
//! | always                             | min(quantity, 10) |
//!
//! # Key Invariant: Exact Beats Prefix
//!
//! The worst exact match collects at least `1000 + 500 + 200 = 1700`. The best
//! starts-with-only match tops out at `500 + 200 + 300 + 100 + 50 + 10 = 1160`.
//! So an exact name match always outranks a name that merely starts with the
//! query, whatever the labels and stock levels. `contracts` checks this at
//! compile time.

use crate::types::{Candidate, NormalizedQuery};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Name equals the query.
pub const EXACT_NAME_SCORE: u32 = 1000;

/// Name starts with the query.
pub const NAME_PREFIX_SCORE: u32 = 500;

/// Secondary label starts with the query.
pub const LABEL_PREFIX_SCORE: u32 = 300;

/// Name contains the query anywhere.
pub const NAME_CONTAINS_SCORE: u32 = 200;

/// Secondary label contains the query anywhere.
pub const LABEL_CONTAINS_SCORE: u32 = 100;

/// Any stock at all.
pub const IN_STOCK_SCORE: u32 = 50;

/// Cap on the per-unit stock bonus.
pub const MAX_QUANTITY_BONUS: u32 = 10;

/// Highest score any candidate can reach.
pub const MAX_SCORE: u32 = EXACT_NAME_SCORE
    + NAME_PREFIX_SCORE
    + LABEL_PREFIX_SCORE
    + NAME_CONTAINS_SCORE
    + LABEL_CONTAINS_SCORE
    + IN_STOCK_SCORE
    + MAX_QUANTITY_BONUS;

/// Which rules fired for one candidate, and what they add up to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub exact_name: bool,
    pub name_prefix: bool,
    pub label_prefix: bool,
    pub name_contains: bool,
    pub label_contains: bool,
    pub in_stock: bool,
    pub quantity_bonus: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        let rule = |fired: bool, points: u32| if fired { points } else { 0 };
        rule(self.exact_name, EXACT_NAME_SCORE)
            + rule(self.name_prefix, NAME_PREFIX_SCORE)
            + rule(self.label_prefix, LABEL_PREFIX_SCORE)
            + rule(self.name_contains, NAME_CONTAINS_SCORE)
            + rule(self.label_contains, LABEL_CONTAINS_SCORE)
            + rule(self.in_stock, IN_STOCK_SCORE)
            + self.quantity_bonus
    }

    /// True when the query matched the name or label somewhere.
    pub fn has_text_match(&self) -> bool {
        self.name_contains || self.label_contains
    }
}

/// Evaluate every rule against one candidate.
///
/// The name and label are lowercased here into throwaway copies; the candidate
/// itself is only read.
pub fn score_breakdown(query: &NormalizedQuery, candidate: &Candidate) -> ScoreBreakdown {
    let q = query.as_str();
    let name = crate::utils::normalize(&candidate.name);
    let label = crate::utils::normalize(&candidate.secondary_label);
    let qty = candidate.available_quantity;

    ScoreBreakdown {
        exact_name: name == q,
        name_prefix: name.starts_with(q),
        label_prefix: label.starts_with(q),
        name_contains: name.contains(q),
        label_contains: label.contains(q),
        in_stock: qty > 0,
        quantity_bonus: qty.min(MAX_QUANTITY_BONUS),
    }
}

/// Relevance score of one candidate for one query. Higher wins.
///
/// Pure: same inputs, same score. Always in `0..=MAX_SCORE`.
pub fn score_candidate(query: &NormalizedQuery, candidate: &Candidate) -> u32 {
    score_breakdown(query, candidate).total()
}
