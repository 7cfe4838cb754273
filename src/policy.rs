// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! How long to wait before looking up a query.
//!
//! Single characters match a huge slice of the catalog and are the most
//! expensive lookups, so they wait longer. Longer queries are cheaper and the
//! user expects them to feel live.
//!
//! | Trimmed length | Decision            |
//! |----------------|---------------------|
//! | 0              | clear immediately   |
//! | 1              | schedule in 500 ms  |
//! | 2+             | schedule in 200 ms  |

use std::time::Duration;

/// Default wait for a one-character query.
pub const SINGLE_CHAR_DELAY: Duration = Duration::from_millis(500);

/// Default wait for anything longer.
pub const MULTI_CHAR_DELAY: Duration = Duration::from_millis(200);

/// What the caller should do with the current input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceDecision {
    /// Nothing to look up: cancel any pending lookup and hide suggestions now.
    Clear,
    /// Schedule a lookup after this delay.
    Schedule(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebouncePolicy {
    pub single_char_delay: Duration,
    pub multi_char_delay: Duration,
}

impl Default for DebouncePolicy {
    fn default() -> Self {
        DebouncePolicy {
            single_char_delay: SINGLE_CHAR_DELAY,
            multi_char_delay: MULTI_CHAR_DELAY,
        }
    }
}

impl DebouncePolicy {
    pub fn delay_for(&self, query: &str) -> DebounceDecision {
        match query.trim().chars().count() {
            0 => DebounceDecision::Clear,
            1 => DebounceDecision::Schedule(self.single_char_delay),
            _ => DebounceDecision::Schedule(self.multi_char_delay),
        }
    }
}
