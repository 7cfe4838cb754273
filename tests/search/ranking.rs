//! Ranking outcomes on realistic product lists.

use rxsuggest::{rank, rank_scored, Candidate};

use crate::common::{make_candidate, names, sample_candidates, sample_catalog};

#[test]
fn test_ibu_prefers_in_stock_prefix_match() {
    let ranked = rank("ibu", &sample_candidates());
    assert_eq!(names(&ranked), ["Ibuprofen Plus", "Ibuprofen", "Paracetamol"]);

    let scores: Vec<u32> = rank_scored("ibu", &sample_candidates())
        .iter()
        .map(|s| s.score)
        .collect();
    assert_eq!(scores, [760, 700, 55]);
}

#[test]
fn test_exact_name_wins_over_stock() {
    let candidates = vec![
        make_candidate("Crocin Advance", "Glaxo", 500),
        make_candidate("Crocin", "Glaxo", 0),
    ];
    assert_eq!(names(&rank("crocin", &candidates)), ["Crocin", "Crocin Advance"]);
}

#[test]
fn test_company_prefix_beats_name_contains() {
    let candidates = vec![
        make_candidate("Dolocip", "Acme", 0),
        make_candidate("Azithral", "Cipla", 0),
    ];
    // "cip": label prefix 400 beats name contains 200
    assert_eq!(names(&rank("cip", &candidates)), ["Azithral", "Dolocip"]);
}

#[test]
fn test_ties_keep_lookup_order() {
    let candidates = vec![
        make_candidate("Amlodipine", "A", 12),
        make_candidate("Amlokind", "B", 30),
        make_candidate("Amlopres", "C", 10),
    ];
    // all 760: prefix + contains + stock + capped bonus
    assert_eq!(
        names(&rank("aml", &candidates)),
        ["Amlodipine", "Amlokind", "Amlopres"]
    );
}

#[test]
fn test_non_matching_candidates_are_kept_last() {
    let ranked = rank("zzz", &sample_catalog());
    assert_eq!(ranked.len(), sample_catalog().len());
    // every well-stocked product ties at 60 and keeps catalog order
    assert_eq!(
        names(&ranked[..3]),
        ["Ibuprofen Plus", "Amoxicillin", "Cetirizine"]
    );
    assert_eq!(ranked.last().map(|c| c.name.as_str()), Some("Azithromycin"));
}

#[test]
fn test_blank_query_orders_by_stock_only() {
    let candidates = vec![
        make_candidate("A", "", 0),
        make_candidate("B", "", 3),
        make_candidate("C", "", 8),
    ];
    // the empty string prefixes and is contained in everything, so every
    // text rule fires for every candidate and only stock separates them
    assert_eq!(names(&rank("   ", &candidates)), ["C", "B", "A"]);
}

#[test]
fn test_input_is_not_modified() {
    let candidates = sample_candidates();
    let before: Vec<Candidate> = candidates.clone();
    let _ = rank("para", &candidates);
    assert_eq!(candidates, before);
}
