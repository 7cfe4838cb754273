// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where candidates come from.
//!
//! The remote product lookup is somebody else's service; all the suggestion
//! box knows is "query string in, candidate list out". [`CandidateSource`] is
//! that contract. [`CatalogSource`] answers it from an in-memory catalog, with
//! the same coarse filter the product search endpoint applies (substring of
//! name or company), leaving the ordering to the ranker.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Candidate, NormalizedQuery, SuggestionResponse};
use crate::utils::normalize;

/// Default cap on how many candidates one lookup returns.
pub const DEFAULT_LOOKUP_LIMIT: usize = 20;

/// Anything that can answer a suggestion lookup.
pub trait CandidateSource {
    fn lookup(&self, query: &str) -> Result<SuggestionResponse>;
}

/// A fixed product list searched in memory.
#[derive(Debug, Clone, Default)]
pub struct CatalogSource {
    candidates: Vec<Candidate>,
    limit: usize,
}

impl CatalogSource {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        CatalogSource {
            candidates,
            limit: DEFAULT_LOOKUP_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Load a catalog file: a bare candidate array or a response envelope.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let response = SuggestionResponse::from_json(&raw, &path.display().to_string())?;
        debug!(target: "source", path = %path.display(), count = response.suggestions.len(), "loaded catalog");
        Ok(CatalogSource::new(response.suggestions))
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl CandidateSource for CatalogSource {
    /// Every candidate whose name or label contains the query, in catalog
    /// order, capped at the limit. A blank query returns nothing.
    fn lookup(&self, query: &str) -> Result<SuggestionResponse> {
        let query = NormalizedQuery::new(query);
        if query.is_empty() {
            return Ok(SuggestionResponse::ok(Vec::new()));
        }

        let hits: Vec<Candidate> = self
            .candidates
            .iter()
            .filter(|c| {
                normalize(&c.name).contains(query.as_str())
                    || normalize(&c.secondary_label).contains(query.as_str())
            })
            .take(self.limit)
            .cloned()
            .collect();

        debug!(target: "source", query = query.as_str(), hits = hits.len(), "catalog lookup");
        Ok(SuggestionResponse::ok(hits))
    }
}
