//! html-grader — check an HTML document for the presence of required CSS selectors.
//!
//! The pipeline is load (local file or one HTTP GET) → parse → evaluate each
//! selector → build a sorted selector → presence report.

pub mod checks;
pub mod document;
pub mod evaluator;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod types;

pub use checks::{load_checks, Checks, CHECKSFILE_DEFAULT};
pub use document::Document;
pub use evaluator::{evaluate, CheckResult};
pub use loader::{HttpFetcher, HTMLFILE_DEFAULT};
pub use pipeline::{check_html_file, check_url, require_url, Grader, UrlCheck};
pub use report::Report;
pub use types::*;
