//! Sequencing load → parse → evaluate → report for both entry modes.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::checks::{load_checks, Checks};
use crate::document::Document;
use crate::evaluator::evaluate;
use crate::loader::{persist, read_local, HttpFetcher};
use crate::report::Report;
use crate::types::{GraderError, GraderResult};

/// Result of URL mode: where the download was saved, and what it contained.
#[derive(Debug, Clone)]
pub struct UrlCheck {
    pub saved_to: PathBuf,
    pub status: u16,
    pub report: Report,
}

/// A checks list bound to an HTTP client.
pub struct Grader {
    checks: Checks,
    fetcher: HttpFetcher,
}

impl Grader {
    pub fn new(checks: Checks) -> Self {
        Self::with_fetcher(checks, HttpFetcher::new())
    }

    pub fn with_fetcher(checks: Checks, fetcher: HttpFetcher) -> Self {
        Self { checks, fetcher }
    }

    /// Load the checks list from a JSON file.
    pub fn from_checks_file(path: &Path) -> GraderResult<Self> {
        Ok(Self::new(load_checks(path)?))
    }

    pub fn checks(&self) -> &Checks {
        &self.checks
    }

    /// Grade an already-parsed document.
    pub fn check_document(&self, document: &Document) -> GraderResult<Report> {
        let results = evaluate(document, &self.checks)?;
        Ok(Report::from_results(results))
    }

    /// Grade a local HTML file without touching the network.
    pub fn check_html_file(&self, html_path: &Path) -> GraderResult<Report> {
        let bytes = read_local(html_path)?;
        let report = self.check_document(&Document::parse(&bytes))?;
        info!(
            "{}: {}/{} checks present",
            html_path.display(),
            report.passed(),
            report.len()
        );
        Ok(report)
    }

    /// Download `url`, save it to `dest`, then grade the saved file.
    ///
    /// Nothing is parsed until the download has completed and been written.
    pub async fn check_url(&self, url: &str, dest: &Path) -> GraderResult<UrlCheck> {
        let fetched = self.fetcher.get(url).await?;
        let saved_to = persist(dest, &fetched.body).await?;
        let report = self.check_html_file(&saved_to)?;
        Ok(UrlCheck {
            saved_to,
            status: fetched.status,
            report,
        })
    }
}

/// Reject a missing URL before any work is done.
pub fn require_url(url: Option<&str>) -> GraderResult<&str> {
    url.ok_or(GraderError::MissingArgument("URL"))
}

/// Grade a local HTML file against the checks in `checks_path`.
pub fn check_html_file(html_path: &Path, checks_path: &Path) -> GraderResult<Report> {
    Grader::from_checks_file(checks_path)?.check_html_file(html_path)
}

/// Fetch `url`, save it to `dest`, and grade it against `checks_path`.
///
/// The checks file is validated before the request is made.
pub async fn check_url(url: Option<&str>, checks_path: &Path, dest: &Path) -> GraderResult<UrlCheck> {
    let grader = Grader::from_checks_file(checks_path)?;
    let url = require_url(url)?;
    grader.check_url(url, dest).await
}
