//! Loading the list of selectors a document is graded against.

use std::cmp::Ordering;
use std::path::Path;

use tracing::debug;

use crate::types::{GraderError, GraderResult};

/// Default checks file, relative to the working directory.
pub const CHECKSFILE_DEFAULT: &str = "checks.json";

/// Selectors to test for, kept in lexicographic order.
///
/// Duplicates are retained; they collapse onto a single key only when the
/// report is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checks {
    selectors: Vec<String>,
}

impl Checks {
    /// Build a checks list from selectors in any order.
    pub fn new(mut selectors: Vec<String>) -> Self {
        selectors.sort_by(|a, b| selector_order(a, b));
        Self { selectors }
    }

    /// Parse a JSON array of selector strings.
    pub fn from_json_slice(bytes: &[u8], origin: &Path) -> GraderResult<Self> {
        let selectors: Vec<String> =
            serde_json::from_slice(bytes).map_err(|source| GraderError::MalformedChecks {
                path: origin.to_path_buf(),
                source,
            })?;
        Ok(Self::new(selectors))
    }

    /// Selectors in evaluation order.
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selectors.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

/// Ordering used for checks and report keys: UTF-16 code units, so
/// characters above U+FFFF sort as their surrogate pairs do.
pub fn selector_order(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

/// Read a checks file from disk.
///
/// Fails with [`GraderError::MissingInput`] before attempting to read when
/// the path does not exist.
pub fn load_checks(path: &Path) -> GraderResult<Checks> {
    assert_file_exists(path)?;
    let bytes = std::fs::read(path)?;
    let checks = Checks::from_json_slice(&bytes, path)?;
    debug!("Loaded {} checks from {}", checks.len(), path.display());
    Ok(checks)
}

/// Confirm an input path exists.
pub fn assert_file_exists(path: &Path) -> GraderResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(GraderError::MissingInput(path.to_path_buf()))
    }
}
