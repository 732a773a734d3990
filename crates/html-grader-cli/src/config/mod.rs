//! Configuration loading and resolution.

use std::path::PathBuf;

use html_grader::{CHECKSFILE_DEFAULT, HTMLFILE_DEFAULT};

/// Environment variable naming the checks file.
pub const CHECKS_ENV: &str = "HTML_GRADER_CHECKS";

/// Environment variable naming where downloads are saved.
pub const OUTPUT_ENV: &str = "HTML_GRADER_OUTPUT";

/// Resolve the checks file path.
pub fn resolve_checks_path(explicit: Option<&str>) -> PathBuf {
    resolve(explicit, std::env::var(CHECKS_ENV).ok(), CHECKSFILE_DEFAULT)
}

/// Resolve the file a downloaded page is written to.
pub fn resolve_output_path(explicit: Option<&str>) -> PathBuf {
    resolve(explicit, std::env::var(OUTPUT_ENV).ok(), HTMLFILE_DEFAULT)
}

fn resolve(explicit: Option<&str>, from_env: Option<String>, default: &str) -> PathBuf {
    if let Some(path) = explicit {
        return PathBuf::from(path);
    }

    match from_env {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_wins() {
        let p = resolve(Some("mine.json"), Some("env.json".into()), CHECKSFILE_DEFAULT);
        assert_eq!(p, PathBuf::from("mine.json"));
    }

    #[test]
    fn test_env_before_default() {
        let p = resolve(None, Some("env.json".into()), CHECKSFILE_DEFAULT);
        assert_eq!(p, PathBuf::from("env.json"));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(resolve(None, None, CHECKSFILE_DEFAULT), PathBuf::from("checks.json"));
        assert_eq!(resolve(None, Some(String::new()), HTMLFILE_DEFAULT), PathBuf::from("test.html"));
    }
}
