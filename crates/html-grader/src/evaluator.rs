//! Testing each selector in a checks list against a document.

use scraper::Selector;
use tracing::debug;

use crate::checks::Checks;
use crate::document::Document;
use crate::types::{GraderError, GraderResult};

/// Outcome of a single selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub selector: String,
    pub present: bool,
}

/// Parse a selector string.
pub fn compile_selector(selector: &str) -> GraderResult<Selector> {
    Selector::parse(selector).map_err(|e| GraderError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Evaluate every check, in the list's (sorted) order.
///
/// A selector is present when it matches at least one element; the search
/// stops at the first match. Matching
/// semantics are entirely those of the selector engine.
pub fn evaluate(document: &Document, checks: &Checks) -> GraderResult<Vec<CheckResult>> {
    let mut results = Vec::with_capacity(checks.len());
    for selector in checks.iter() {
        let compiled = compile_selector(selector)?;
        let present = document.contains(&compiled);
        debug!("{selector:?} present: {present}");
        results.push(CheckResult {
            selector: selector.to_string(),
            present,
        });
    }
    Ok(results)
}
