//! Obtaining raw document bytes, from disk or over HTTP.
//!
//! The HTTP side issues exactly one GET per call. There is no retry and no
//! request timeout; a server that never answers stalls the caller.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::checks::assert_file_exists;
use crate::types::{GraderError, GraderResult};

/// Where a downloaded document is saved before it is checked.
pub const HTMLFILE_DEFAULT: &str = "test.html";

const USER_AGENT: &str = concat!("html-grader/", env!("CARGO_PKG_VERSION"));

/// Body and metadata of a completed GET.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    /// Final URL after redirects.
    pub final_url: String,
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// HTTP client used by URL mode.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// Perform a single GET.
    ///
    /// Any response the server completes counts as a download, whatever its
    /// status; only transport failures are errors.
    pub async fn get(&self, url: &str) -> GraderResult<FetchedDocument> {
        debug!("GET {url}");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GraderError::fetch_from(url, &e))?;

        let status = resp.status();
        let final_url = resp.url().to_string();
        if !status.is_success() {
            warn!("{url} answered with HTTP {status}; checking the body anyway");
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| GraderError::fetch_from(url, &e))?;

        info!("Downloaded {} bytes from {final_url}", body.len());
        Ok(FetchedDocument {
            final_url,
            status: status.as_u16(),
            body: body.to_vec(),
        })
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a local HTML file.
pub fn read_local(path: &Path) -> GraderResult<Vec<u8>> {
    assert_file_exists(path)?;
    let bytes = std::fs::read(path)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Write downloaded bytes to `dest`, replacing whatever was there.
pub async fn persist(dest: &Path, bytes: &[u8]) -> GraderResult<PathBuf> {
    tokio::fs::write(dest, bytes).await?;
    debug!("Wrote {}", dest.display());
    Ok(dest.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_local_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.html");
        assert!(matches!(
            read_local(&path),
            Err(GraderError::MissingInput(p)) if p == path
        ));
    }

    #[test]
    fn test_read_local_returns_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "<p>hi</p>").unwrap();
        assert_eq!(read_local(&path).unwrap(), b"<p>hi</p>");
    }

    #[tokio::test]
    async fn test_persist_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join(HTMLFILE_DEFAULT);
        std::fs::write(&dest, "old contents that are longer").unwrap();

        let written = persist(&dest, b"new").await.unwrap();
        assert_eq!(written, dest);
        assert_eq!(std::fs::read(&dest).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_get_connection_refused() {
        // Port 1 is reserved and nothing listens on it in test environments.
        let fetcher = HttpFetcher::new();
        let err = fetcher.get("http://127.0.0.1:1/").await.unwrap_err();
        match err {
            GraderError::Fetch { url, message } => {
                assert_eq!(url, "http://127.0.0.1:1/");
                assert!(
                    message.to_lowercase().contains("refused"),
                    "cause missing from {message:?}"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
