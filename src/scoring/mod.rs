// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how suggestions get their numbers and their order.
//!
//! Scoring is additive: each matching rule adds points and the total decides
//! the order. The rules stack on purpose, so an exact name match also earns the
//! prefix and substring bonuses.

mod core;
pub mod ranking;

pub use core::*;
