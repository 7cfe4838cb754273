//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use std::fs;
use std::path::PathBuf;

use rxsuggest::Candidate;
use tempfile::TempDir;

// Re-export canonical test utilities from rxsuggest::testing
pub use rxsuggest::testing::{make_candidate, names, sample_candidates, sample_catalog};

// ============================================================================
// FIXTURE FILES
// ============================================================================

/// Candidates in the field naming the product search endpoint returns.
pub const SNAKE_CASE_RESPONSE: &str = r#"{
    "success": true,
    "suggestions": [
        {"product_name": "Paracetamol", "product_company": "Acme", "current_stock": 5, "product_packing": "10 tablets"},
        {"product_name": "Ibuprofen", "product_company": "Acme", "current_stock": 0, "product_packing": "10 tablets"},
        {"product_name": "Ibuprofen Plus", "product_company": "Zenith", "current_stock": 20, "product_packing": "15 tablets"}
    ]
}"#;

/// Write `contents` to `name` inside a fresh temp dir. Keep the `TempDir`
/// alive for as long as the path is used.
pub fn write_fixture(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    (dir, path)
}

/// Serialize candidates as a bare JSON array.
pub fn catalog_json(candidates: &[Candidate]) -> String {
    serde_json::to_string(candidates).expect("serialize catalog")
}
