//! The grading command behind the `html-grader` binary.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use html_grader::{require_url, Grader, Report};

/// What to grade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Download from a URL and save to `output` first. `None` is a usage error
    /// reported once the checks file has been validated.
    Url {
        url: Option<String>,
        output: PathBuf,
    },
    /// Grade a file already on disk.
    File(PathBuf),
}

/// Fully resolved arguments for one run.
#[derive(Debug, Clone)]
pub struct GradeArgs {
    pub checks: PathBuf,
    pub target: Target,
}

/// Run the grading pipeline and write the report to `out`.
///
/// Nothing is written to `out` unless every step succeeds.
pub async fn run<W: Write>(args: &GradeArgs, out: &mut W) -> Result<Report> {
    let grader = Grader::from_checks_file(&args.checks)?;

    let report = match &args.target {
        Target::Url { url, output } => {
            let url = require_url(url.as_deref())?;
            info!("Grading {url} against {}", args.checks.display());
            let outcome = grader.check_url(url, output).await?;
            info!("Saved {} (HTTP {})", outcome.saved_to.display(), outcome.status);
            outcome.report
        }
        Target::File(path) => grader.check_html_file(path)?,
    };

    report.write_to(out).context("failed to write report")?;
    out.flush().context("failed to write report")?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use html_grader::GraderError;

    fn fixture(dir: &std::path::Path, checks: &str, html: &str) -> (PathBuf, PathBuf) {
        let checks_path = dir.join("checks.json");
        let html_path = dir.join("page.html");
        std::fs::write(&checks_path, checks).unwrap();
        std::fs::write(&html_path, html).unwrap();
        (checks_path, html_path)
    }

    #[tokio::test]
    async fn test_file_target_prints_report() {
        let dir = tempfile::tempdir().unwrap();
        let (checks, html) = fixture(
            dir.path(),
            r#"["h1","a[href]"]"#,
            "<html><body><h1>Hi</h1></body></html>",
        );
        let args = GradeArgs {
            checks,
            target: Target::File(html),
        };

        let mut out = Vec::new();
        run(&args, &mut out).await.unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n    \"a[href]\": false,\n    \"h1\": true\n}\n"
        );
    }

    #[tokio::test]
    async fn test_missing_url_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (checks, _) = fixture(dir.path(), r#"["h1"]"#, "");
        let args = GradeArgs {
            checks,
            target: Target::Url {
                url: None,
                output: dir.path().join("test.html"),
            },
        };

        let mut out = Vec::new();
        let err = run(&args, &mut out).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GraderError>(),
            Some(GraderError::MissingArgument(_))
        ));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_selector_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (checks, html) = fixture(dir.path(), r#"["h1", "div[["]"#, "<h1>x</h1>");
        let args = GradeArgs {
            checks,
            target: Target::File(html),
        };

        let mut out = Vec::new();
        let err = run(&args, &mut out).await.unwrap_err();
        assert!(err.to_string().contains("div[["));
        assert!(out.is_empty());
    }
}
