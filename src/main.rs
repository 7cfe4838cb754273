// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rxsuggest::{
    rank_scored, score_breakdown, score_candidate, Candidate, CandidateSource, CatalogSource,
    Config, DebounceDecision, DebounceScheduler, NormalizedQuery, StockLevel, SuggestionResponse,
    SuggestionWidget, WidgetStatus,
};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

/// One widget, one debounce key.
const SEARCH_FIELD: &str = "product-search";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", themed(RED, &[BOLD], "error:"), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    let filter = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).context("loading config")?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Rank {
            query,
            input,
            limit,
            json,
        } => {
            let response = read_response(input.as_deref())?;
            let limit = limit.unwrap_or(config.display.limit);
            run_rank(&config, &query, response, limit, json)
        }
        Commands::Inspect { query, input } => {
            let response = read_response(input.as_deref())?;
            run_inspect(&query, &response.suggestions);
            Ok(())
        }
        Commands::Type {
            text,
            catalog,
            interval_ms,
        } => {
            let source = CatalogSource::from_path(&catalog)
                .with_context(|| format!("loading catalog {}", catalog.display()))?
                .with_limit(config.lookup.limit);
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .context("starting timer runtime")?;
            runtime.block_on(run_type(
                &config,
                source,
                &text,
                Duration::from_millis(interval_ms),
            ));
            Ok(())
        }
    }
}

/// Read a lookup response from `path`, or stdin when there is none.
fn read_response(path: Option<&Path>) -> Result<SuggestionResponse> {
    let (raw, context) = match path {
        Some(path) => (
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
            path.display().to_string(),
        ),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("reading stdin")?;
            (raw, "stdin".to_string())
        }
    };
    Ok(SuggestionResponse::from_json(&raw, &context)?)
}

// ═══════════════════════════════════════════════════════════════════════════
// rank
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RankedRow<'a> {
    #[serde(flatten)]
    candidate: &'a Candidate,
    score: u32,
    stock: &'static str,
}

fn run_rank(
    config: &Config,
    query: &str,
    response: SuggestionResponse,
    limit: usize,
    json: bool,
) -> Result<()> {
    let mut widget = SuggestionWidget::new(config.debounce_policy());
    widget.handle_input(query);
    widget.apply_response(query, response);

    let normalized = NormalizedQuery::new(query);
    let shown = widget.suggestions().iter().take(limit);

    if json {
        let rows: Vec<RankedRow<'_>> = shown
            .map(|candidate| RankedRow {
                candidate,
                score: score_candidate(&normalized, candidate),
                stock: StockLevel::classify(candidate.available_quantity).label(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    match (widget.status(), widget.header()) {
        (WidgetStatus::Results, Some(header)) => println!("{}", themed(CYAN, &[BOLD], &header)),
        _ => {
            println!("{}", themed(GRAY, &[], "No products found"));
            return Ok(());
        }
    }

    for (i, candidate) in shown.enumerate() {
        let score = score_candidate(&normalized, candidate);
        let name = highlight(&candidate.name, &widget.highlight(&candidate.name));
        println!(
            "{} {}  {}  {}  {}  {}",
            pad_left(&format!("{}.", i + 1), 3),
            score_value(score),
            pad_right(&name, 28),
            pad_right(&themed(GRAY, &[], &candidate.secondary_label), 18),
            pad_right(&candidate.packing, 12),
            stock_badge(candidate.available_quantity)
        );
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// inspect
// ═══════════════════════════════════════════════════════════════════════════

fn run_inspect(query: &str, candidates: &[Candidate]) {
    let normalized = NormalizedQuery::new(query);

    section_top(&format!("SCORES FOR {:?}", normalized.as_str()));
    row(&format!(
        " {}  {}",
        pad_right("candidate", 26),
        "exact pre:n pre:l has:n has:l stock  +qty  total"
    ));

    for scored in rank_scored(query, candidates) {
        let b = score_breakdown(&normalized, scored.candidate);
        row(&format!(
            " {}  {}     {}     {}     {}     {}     {}    {}  {}",
            pad_right(&truncate(&scored.candidate.name, 26), 26),
            rule_flag(b.exact_name),
            rule_flag(b.name_prefix),
            rule_flag(b.label_prefix),
            rule_flag(b.name_contains),
            rule_flag(b.label_contains),
            rule_flag(b.in_stock),
            pad_left(&b.quantity_bonus.to_string(), 3),
            score_value(b.total())
        ));
    }
    section_bot();
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// type
// ═══════════════════════════════════════════════════════════════════════════

async fn run_type(config: &Config, source: CatalogSource, text: &str, interval: Duration) {
    let started = tokio::time::Instant::now();
    let source = Arc::new(source);
    let widget = Arc::new(Mutex::new(SuggestionWidget::new(config.debounce_policy())));
    let scheduler = DebounceScheduler::new();

    section_top("KEYSTROKES");
    let mut typed = String::new();
    for ch in text.chars() {
        typed.push(ch);
        let decision = widget.lock().handle_input(&typed);
        let at = elapsed_ms(started.elapsed().as_millis());

        match decision {
            DebounceDecision::Clear => {
                scheduler.cancel(&SEARCH_FIELD);
                row(&format!(" {} {:<20} cleared", at, format!("{:?}", typed)));
            }
            DebounceDecision::Schedule(delay) => {
                row(&format!(
                    " {} {:<20} lookup in {}ms",
                    at,
                    format!("{:?}", typed),
                    delay.as_millis()
                ));
                let (source, widget) = (Arc::clone(&source), Arc::clone(&widget));
                let query = typed.clone();
                scheduler.schedule(SEARCH_FIELD, delay, move || {
                    let mut widget = widget.lock();
                    widget.begin_lookup();
                    match source.lookup(&query) {
                        Ok(response) => widget.apply_response(&query, response),
                        Err(e) => {
                            warn!(error = %e, "lookup failed");
                            widget.fail_lookup();
                        }
                    }
                    row(&format!(
                        " {} {:<20} {}",
                        elapsed_ms(started.elapsed().as_millis()),
                        format!("{:?}", query),
                        themed(GREEN, &[BOLD], &format!("FIRED ({} hits)", widget.suggestions().len()))
                    ));
                });
            }
        }
        tokio::time::sleep(interval).await;
    }

    // Let the last pending lookup land.
    let policy = config.debounce_policy();
    tokio::time::sleep(policy.single_char_delay.max(policy.multi_char_delay)).await;
    tokio::time::sleep(Duration::from_millis(10)).await;
    section_bot();

    let widget = widget.lock();
    match widget.header() {
        Some(header) => println!("{}", themed(CYAN, &[BOLD], &header)),
        None => println!("{}", themed(GRAY, &[], "No products found")),
    }
    for (i, candidate) in widget.suggestions().iter().take(config.display.limit).enumerate() {
        println!(
            "{} {}  {}",
            pad_left(&format!("{}.", i + 1), 3),
            pad_right(&highlight(&candidate.name, &widget.highlight(&candidate.name)), 28),
            stock_badge(candidate.available_quantity)
        );
    }
}
