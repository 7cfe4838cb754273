// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the rxsuggest command-line interface.
//!
//! Three subcommands: `rank` to order a lookup response for a query, `inspect`
//! to see which scoring rules fired for each candidate, and `type` to replay
//! keystrokes through the debouncer against a catalog and watch which lookups
//! actually go out.

pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rxsuggest",
    about = "Product-search suggestion ranking and debounced lookup",
    version
)]
pub struct Cli {
    /// JSON config file (debounce delays, lookup and display limits)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a lookup response by relevance to a query
    Rank {
        /// Search query as typed
        query: String,

        /// JSON response or candidate array (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Maximum number of suggestions to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print ranked candidates with scores as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the per-rule score breakdown for every candidate
    Inspect {
        /// Search query as typed
        query: String,

        /// JSON response or candidate array (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Replay typing `text` one character at a time through the debouncer
    Type {
        /// Text to type
        text: String,

        /// Catalog file the lookups run against
        #[arg(short, long)]
        catalog: PathBuf,

        /// Pause between keystrokes
        #[arg(long, default_value = "100")]
        interval_ms: u64,
    },
}
