// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that flow through the suggestion pipeline.
//!
//! A lookup returns [`Candidate`]s wrapped in a [`SuggestionResponse`]. The
//! ranker reads them, never owns or mutates them, and hands back a new ordering.
//!
//! # Leniency
//!
//! Candidates arrive from a remote collaborator whose payloads are not under our
//! control. Deserialization never rejects a candidate for a bad field:
//!
//! | Field               | Accepted keys                                          | Fallback |
//! |---------------------|--------------------------------------------------------|----------|
//! | `name`              | `name`, `product_name`                                 | `""`     |
//! | `secondary_label`   | `secondaryLabel`, `secondary_label`, `product_company` | `""`     |
//! | `available_quantity`| `availableQuantity`, `available_quantity`, `current_stock` | `0`  |
//! | `packing`           | `packing`, `product_packing`                           | `""`     |
//!
//! Quantities that are negative, fractional, null or non-numeric collapse to
//! something in `0..=u32::MAX` so that scoring stays total.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::utils::normalize;

/// One searchable product offered as a suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, alias = "product_name", deserialize_with = "lenient_string")]
    pub name: String,

    /// Organization or company the product belongs to.
    #[serde(
        default,
        alias = "secondary_label",
        alias = "product_company",
        deserialize_with = "lenient_string"
    )]
    pub secondary_label: String,

    #[serde(
        default,
        alias = "available_quantity",
        alias = "current_stock",
        deserialize_with = "lenient_quantity"
    )]
    pub available_quantity: u32,

    /// Pack size label ("10 tablets", "100ml"). Display only, never scored.
    #[serde(
        default,
        alias = "product_packing",
        deserialize_with = "lenient_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub packing: String,
}

impl Candidate {
    pub fn new(name: impl Into<String>, secondary_label: impl Into<String>, qty: u32) -> Self {
        Candidate {
            name: name.into(),
            secondary_label: secondary_label.into(),
            available_quantity: qty,
            packing: String::new(),
        }
    }

    pub fn with_packing(mut self, packing: impl Into<String>) -> Self {
        self.packing = packing.into();
        self
    }
}

/// Envelope returned by a suggestion lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    /// A response without `success: true` is a failed lookup, whatever it carries.
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub suggestions: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ResponsePayload {
    Bare(Vec<Candidate>),
    Envelope(SuggestionResponse),
}

impl SuggestionResponse {
    pub fn ok(suggestions: Vec<Candidate>) -> Self {
        SuggestionResponse {
            success: true,
            suggestions,
        }
    }

    pub fn failed() -> Self {
        SuggestionResponse::default()
    }

    /// Parse either the `{ "success": .., "suggestions": [..] }` envelope or a
    /// bare array of candidates (treated as a successful lookup).
    pub fn from_json(raw: &str, context: &str) -> Result<Self> {
        let payload: ResponsePayload =
            serde_json::from_str(raw).map_err(|e| Error::json(context, e))?;
        Ok(match payload {
            ResponsePayload::Bare(suggestions) => SuggestionResponse::ok(suggestions),
            ResponsePayload::Envelope(response) => response,
        })
    }
}

/// A query in comparison form: trimmed and lowercased once, up front.
///
/// The caller's input string is never touched; every comparison in scoring goes
/// through this derived copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    pub fn new(raw: &str) -> Self {
        NormalizedQuery(normalize(raw.trim()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

/// A candidate paired with its score for the duration of one ranking call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a Candidate,
    /// Index in the input slice; the stable-sort tiebreaker.
    pub position: usize,
    pub score: u32,
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_quantity<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(quantity_from_value(&Value::deserialize(deserializer)?))
}

pub(crate) fn quantity_from_value(value: &Value) -> u32 {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(whole) => u32::try_from(whole).unwrap_or(u32::MAX),
            None => n.as_f64().map(clamp_quantity).unwrap_or(0),
        },
        Value::String(s) => s.trim().parse::<f64>().map(clamp_quantity).unwrap_or(0),
        _ => 0,
    }
}

fn clamp_quantity(raw: f64) -> u32 {
    if raw.is_nan() || raw <= 0.0 {
        0
    } else if raw >= u32::MAX as f64 {
        u32::MAX
    } else {
        raw.trunc() as u32
    }
}
