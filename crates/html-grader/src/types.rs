//! Error types shared by every stage of the grading pipeline.

use std::path::PathBuf;

/// Fallback message for fetch failures that carry no description of their own.
pub const GENERIC_FETCH_MESSAGE: &str = "Unable to download from given url";

/// Errors that can occur while grading a document.
#[derive(thiserror::Error, Debug)]
pub enum GraderError {
    #[error("{} does not exist", .0.display())]
    MissingInput(PathBuf),

    #[error("{0} argument missing")]
    MissingArgument(&'static str),

    #[error("{message}")]
    Fetch { url: String, message: String },

    #[error("{} is not a valid checks file: {source}", .path.display())]
    MalformedChecks {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraderError {
    /// Build a fetch error, substituting the generic message when the
    /// underlying failure has nothing to say.
    pub fn fetch(url: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            GENERIC_FETCH_MESSAGE.to_string()
        } else {
            message
        };
        GraderError::Fetch {
            url: url.to_string(),
            message,
        }
    }

    /// Build a fetch error from a client failure, keeping every cause in its
    /// source chain (e.g. the refused connection behind a send error).
    pub fn fetch_from(url: &str, err: &(dyn std::error::Error + 'static)) -> Self {
        Self::fetch(url, error_chain(err))
    }
}

/// Render an error and all of its sources, joined with `": "`.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut cause: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = cause {
        let text = e.to_string();
        // Some wrappers repeat their source's text verbatim.
        if !text.is_empty() && parts.last().map_or(true, |last| !last.ends_with(&text)) {
            parts.push(text);
        }
        cause = e.source();
    }
    parts.join(": ")
}

/// Convenience result type.
pub type GraderResult<T> = Result<T, GraderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_names_path() {
        let err = GraderError::MissingInput(PathBuf::from("nonexistent.json"));
        assert_eq!(err.to_string(), "nonexistent.json does not exist");
    }

    #[test]
    fn test_missing_url_message() {
        let err = GraderError::MissingArgument("URL");
        assert_eq!(err.to_string(), "URL argument missing");
    }

    #[test]
    fn test_fetch_falls_back_to_generic_message() {
        let err = GraderError::fetch("http://example.invalid/", "  ");
        assert_eq!(err.to_string(), GENERIC_FETCH_MESSAGE);

        let err = GraderError::fetch("http://example.invalid/", "connection refused");
        assert_eq!(err.to_string(), "connection refused");
    }

    #[derive(thiserror::Error, Debug)]
    #[error("error sending request")]
    struct Outer(#[source] std::io::Error);

    #[test]
    fn test_fetch_message_includes_causes() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "Connection refused");
        let err = GraderError::fetch_from("http://127.0.0.1:1/", &Outer(inner));
        assert_eq!(err.to_string(), "error sending request: Connection refused");
    }
}
