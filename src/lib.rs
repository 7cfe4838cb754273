//! Relevance ranking and debouncing for product-search suggestions.
//!
//! A search box asks a remote service for products as the user types. This
//! crate decides when to ask, and in what order to show what comes back.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌────────────────┐
//! │  policy.rs  │────▶│ debounce.rs  │────▶│   source.rs    │
//! │ (delay by   │     │ (one pending │     │ (lookup: query │
//! │  length)    │     │  timer/key)  │     │  → candidates) │
//! └─────────────┘     └──────────────┘     └────────────────┘
//!        ▲                                          │
//!        │                                          ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      widget.rs                       │
//! │  (caller-owned state: query, ranked list, focus)     │
//! └─────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//!                ┌─────────────────────┐
//!                │     scoring/        │
//!                │ (score_candidate,   │
//!                │  stable rank)       │
//!                └─────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use rxsuggest::{rank, Candidate, DebounceDecision, DebouncePolicy};
//! use std::time::Duration;
//!
//! let policy = DebouncePolicy::default();
//! assert_eq!(policy.delay_for("i"), DebounceDecision::Schedule(Duration::from_millis(500)));
//!
//! let ranked = rank("ibu", &[
//!     Candidate::new("Ibuprofen", "Acme", 0),
//!     Candidate::new("Ibuprofen Plus", "Zenith", 20),
//! ]);
//! assert_eq!(ranked[0].name, "Ibuprofen Plus");
//! ```

// Module declarations
pub mod config;
pub mod contracts;
pub mod debounce;
mod error;
pub mod policy;
mod scoring;
pub mod source;
pub mod testing;
mod types;
mod utils;
pub mod widget;

// Re-exports for public API
pub use config::Config;
pub use debounce::DebounceScheduler;
pub use error::{Error, Result};
pub use policy::{DebounceDecision, DebouncePolicy};
pub use scoring::ranking::{compare_scored, rank, rank_scored};
pub use scoring::{
    score_breakdown, score_candidate, ScoreBreakdown, EXACT_NAME_SCORE, IN_STOCK_SCORE,
    LABEL_CONTAINS_SCORE, LABEL_PREFIX_SCORE, MAX_QUANTITY_BONUS, MAX_SCORE, NAME_CONTAINS_SCORE,
    NAME_PREFIX_SCORE,
};
pub use source::{CandidateSource, CatalogSource};
pub use types::{Candidate, NormalizedQuery, ScoredCandidate, SuggestionResponse};
pub use utils::{match_spans, normalize};
pub use widget::{EnterAction, SearchScope, StockLevel, SuggestionWidget, WidgetStatus};
