// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration.
//!
//! Layered: built-in defaults, then an optional JSON file (every field
//! optional), then environment variables. Bad environment values are logged
//! and skipped rather than failing startup.
//!
//! | Variable                   | Field                  | Default |
//! |----------------------------|------------------------|---------|
//! | `RXSUGGEST_SINGLE_CHAR_MS` | `debounce.single_char_ms` | 500  |
//! | `RXSUGGEST_MULTI_CHAR_MS`  | `debounce.multi_char_ms`  | 200  |
//! | `RXSUGGEST_LOOKUP_LIMIT`   | `lookup.limit`            | 20   |

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::policy::{DebouncePolicy, MULTI_CHAR_DELAY, SINGLE_CHAR_DELAY};
use crate::source::DEFAULT_LOOKUP_LIMIT;

pub const ENV_SINGLE_CHAR_MS: &str = "RXSUGGEST_SINGLE_CHAR_MS";
pub const ENV_MULTI_CHAR_MS: &str = "RXSUGGEST_MULTI_CHAR_MS";
pub const ENV_LOOKUP_LIMIT: &str = "RXSUGGEST_LOOKUP_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DebounceConfig {
    pub single_char_ms: u64,
    pub multi_char_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        DebounceConfig {
            single_char_ms: SINGLE_CHAR_DELAY.as_millis() as u64,
            multi_char_ms: MULTI_CHAR_DELAY.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LookupConfig {
    pub limit: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            limit: DEFAULT_LOOKUP_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Rows printed by the CLI unless `--limit` says otherwise.
    pub limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { limit: 10 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub debounce: DebounceConfig,
    pub lookup: LookupConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Defaults, then `path` if given, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Config::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&raw).map_err(|e| Error::json(path.display().to_string(), e))
    }

    /// Apply overrides from `lookup` (the environment, or a map in tests).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ms) = parse_override::<u64, _>(&lookup, ENV_SINGLE_CHAR_MS) {
            self.debounce.single_char_ms = ms;
        }
        if let Some(ms) = parse_override::<u64, _>(&lookup, ENV_MULTI_CHAR_MS) {
            self.debounce.multi_char_ms = ms;
        }
        if let Some(limit) = parse_override::<usize, _>(&lookup, ENV_LOOKUP_LIMIT) {
            self.lookup.limit = limit;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.lookup.limit == 0 {
            return Err(Error::Config("lookup.limit must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn debounce_policy(&self) -> DebouncePolicy {
        DebouncePolicy {
            single_char_delay: Duration::from_millis(self.debounce.single_char_ms),
            multi_char_delay: Duration::from_millis(self.debounce.multi_char_ms),
        }
    }
}

fn parse_override<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(target: "config", key, value = trimmed, "ignoring unparsable override");
            None
        }
    }
}
