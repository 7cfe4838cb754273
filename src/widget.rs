// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Caller-owned state for one suggestion box.
//!
//! Everything the box needs to remember between events lives in a
//! [`SuggestionWidget`] value that the caller owns and passes around. Two
//! search boxes on one page are two widgets; nothing is global.
//!
//! The widget decides *what* to show. Drawing it, and running the debounced
//! lookup, stay with the caller:
//!
//! ```text
//!   input ──▶ handle_input ──▶ DebounceDecision ──▶ caller schedules lookup
//!                                                        │
//!   render ◀── status/suggestions/focus ◀── apply_response ◀┘
//! ```

use crate::contracts::check_focus_in_bounds;
use crate::policy::{DebounceDecision, DebouncePolicy};
use crate::scoring::ranking::rank;
use crate::types::{Candidate, SuggestionResponse};
use crate::utils::match_spans;

/// What the suggestion panel currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetStatus {
    /// No lookup since the input was last cleared.
    Idle,
    Loading,
    Results,
    NoResults,
    Error,
}

/// Outcome of pressing Enter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnterAction {
    /// A suggestion was focused; the input now holds its name.
    Select(Candidate),
    /// Nothing focused; submit the typed query as a plain search.
    SubmitQuery(String),
}

/// Stock badge shown next to each suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Out,
    Low,
    Good,
}

/// Low stock threshold, inclusive.
pub const LOW_STOCK_MAX: u32 = 10;

impl StockLevel {
    pub fn classify(quantity: u32) -> Self {
        match quantity {
            0 => StockLevel::Out,
            1..=LOW_STOCK_MAX => StockLevel::Low,
            _ => StockLevel::Good,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockLevel::Out => "out of stock",
            StockLevel::Low => "low stock",
            StockLevel::Good => "in stock",
        }
    }
}

/// How broad the backend search was, judged from the query length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    StartingWith,
    NameAndCompany,
    Comprehensive,
}

impl SearchScope {
    pub fn for_query(query: &str) -> Self {
        match query.trim().chars().count() {
            1 => SearchScope::StartingWith,
            2 => SearchScope::NameAndCompany,
            _ => SearchScope::Comprehensive,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchScope::StartingWith => "starting with",
            SearchScope::NameAndCompany => "name & company",
            SearchScope::Comprehensive => "comprehensive",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SuggestionWidget {
    policy: DebouncePolicy,
    query: String,
    suggestions: Vec<Candidate>,
    focus: Option<usize>,
    status: WidgetStatus,
    visible: bool,
}

impl Default for SuggestionWidget {
    fn default() -> Self {
        Self::new(DebouncePolicy::default())
    }
}

impl SuggestionWidget {
    pub fn new(policy: DebouncePolicy) -> Self {
        SuggestionWidget {
            policy,
            query: String::new(),
            suggestions: Vec::new(),
            focus: None,
            status: WidgetStatus::Idle,
            visible: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[Candidate] {
        &self.suggestions
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn focused(&self) -> Option<&Candidate> {
        self.focus.and_then(|i| self.suggestions.get(i))
    }

    pub fn status(&self) -> WidgetStatus {
        self.status
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn policy(&self) -> &DebouncePolicy {
        &self.policy
    }

    // ------------------------------------------------------------------------
    // Input and lookup lifecycle
    // ------------------------------------------------------------------------

    /// Record new input and say whether (and when) to look it up.
    ///
    /// On [`DebounceDecision::Clear`] the panel is hidden and emptied right
    /// away; the caller still has to cancel its pending lookup.
    pub fn handle_input(&mut self, value: &str) -> DebounceDecision {
        self.query = value.to_string();
        let decision = self.policy.delay_for(value);
        if decision == DebounceDecision::Clear {
            self.suggestions.clear();
            self.status = WidgetStatus::Idle;
            self.hide();
        }
        decision
    }

    /// A lookup has started.
    pub fn begin_lookup(&mut self) {
        self.status = WidgetStatus::Loading;
        self.visible = true;
    }

    /// A lookup for `query` came back.
    ///
    /// Successful responses are ranked against the query the lookup was made
    /// for. A failed response shows "no results", like an empty one.
    pub fn apply_response(&mut self, query: &str, response: SuggestionResponse) {
        self.suggestions = if response.success {
            rank(query, &response.suggestions)
        } else {
            Vec::new()
        };
        self.status = if self.suggestions.is_empty() {
            WidgetStatus::NoResults
        } else {
            WidgetStatus::Results
        };
        self.focus = None;
        self.visible = true;
    }

    /// The lookup itself failed (transport error, bad payload).
    pub fn fail_lookup(&mut self) {
        self.suggestions.clear();
        self.status = WidgetStatus::Error;
        self.focus = None;
        self.visible = true;
    }

    /// The input regained focus: show the last panel again if there is one.
    pub fn on_focus(&mut self) {
        if !self.query.is_empty() && self.status != WidgetStatus::Idle {
            self.visible = true;
        }
    }

    /// Hide the panel (click outside, Escape, selection). Resets focus.
    pub fn hide(&mut self) {
        self.visible = false;
        self.focus = None;
    }

    // ------------------------------------------------------------------------
    // Keyboard and pointer navigation
    // ------------------------------------------------------------------------

    /// ArrowDown: next suggestion, sticking at the last one.
    pub fn move_down(&mut self) {
        let len = self.navigable_len();
        self.focus = match (self.focus, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some((i + 1).min(len - 1)),
        };
        check_focus_in_bounds(self.focus, self.suggestions.len());
    }

    /// ArrowUp: previous suggestion; moving up from the first one leaves the list.
    pub fn move_up(&mut self) {
        self.focus = match self.focus {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
        check_focus_in_bounds(self.focus, self.suggestions.len());
    }

    /// Pointer hover. Out-of-range indices are ignored.
    pub fn set_active(&mut self, index: usize) {
        if index < self.navigable_len() {
            self.focus = Some(index);
        }
    }

    pub fn enter(&mut self) -> EnterAction {
        match self.focus.and_then(|i| self.select(i)) {
            Some(candidate) => EnterAction::Select(candidate),
            None => EnterAction::SubmitQuery(self.query.clone()),
        }
    }

    /// Escape: hide without touching the query.
    pub fn escape(&mut self) {
        self.hide();
    }

    /// Pick suggestion `index`: the input takes its name and the panel closes.
    pub fn select(&mut self, index: usize) -> Option<Candidate> {
        let candidate = self.suggestions.get(index)?.clone();
        self.query = candidate.name.clone();
        self.hide();
        Some(candidate)
    }

    // ------------------------------------------------------------------------
    // Presentation
    // ------------------------------------------------------------------------

    /// "3 products found (comprehensive)". `None` unless showing results.
    pub fn header(&self) -> Option<String> {
        if self.status != WidgetStatus::Results {
            return None;
        }
        let n = self.suggestions.len();
        Some(format!(
            "{} product{} found ({})",
            n,
            if n == 1 { "" } else { "s" },
            SearchScope::for_query(&self.query).label()
        ))
    }

    /// Byte ranges of the current query inside `text`, for highlighting.
    pub fn highlight(&self, text: &str) -> Vec<(usize, usize)> {
        match_spans(text, &self.query)
    }

    fn navigable_len(&self) -> usize {
        if self.visible && self.status == WidgetStatus::Results {
            self.suggestions.len()
        } else {
            0
        }
    }
}
