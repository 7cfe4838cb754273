//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::Candidate;

/// Create a candidate with no packing label.
pub fn make_candidate(name: &str, label: &str, qty: u32) -> Candidate {
    Candidate::new(name, label, qty)
}

/// The three-product list used throughout the ranking examples:
/// Paracetamol/Acme/5, Ibuprofen/Acme/0, Ibuprofen Plus/Zenith/20.
pub fn sample_candidates() -> Vec<Candidate> {
    vec![
        make_candidate("Paracetamol", "Acme", 5),
        make_candidate("Ibuprofen", "Acme", 0),
        make_candidate("Ibuprofen Plus", "Zenith", 20),
    ]
}

/// A small pharmacy catalog with overlapping names and companies.
pub fn sample_catalog() -> Vec<Candidate> {
    vec![
        make_candidate("Paracetamol", "Acme", 5).with_packing("10 tablets"),
        make_candidate("Ibuprofen", "Acme", 0).with_packing("10 tablets"),
        make_candidate("Ibuprofen Plus", "Zenith", 20).with_packing("15 tablets"),
        make_candidate("Amoxicillin", "Amox Labs", 40).with_packing("10 capsules"),
        make_candidate("Crocin", "Glaxo", 9).with_packing("15 tablets"),
        make_candidate("Azithromycin", "Zenith", 0).with_packing("3 tablets"),
        make_candidate("Cetirizine", "Cipla", 120).with_packing("10 tablets"),
        make_candidate("Ibugesic", "Cipla", 2).with_packing("100ml"),
    ]
}

/// Names in order, for compact assertions.
pub fn names(candidates: &[Candidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.name.as_str()).collect()
}
