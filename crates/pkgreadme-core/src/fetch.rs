use crate::error::{ReadmeError, Result};

/// Fetches remote section content referenced by URL.
pub trait ContentFetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP GET. Non-2xx responses and transport failures are errors.
#[derive(Debug, Default)]
pub struct HttpFetcher;

impl ContentFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        log::info!("fetching {url}");

        let response = ureq::get(url)
            .header("User-Agent", "pkgreadme")
            .call()
            .map_err(|e| match e {
                ureq::Error::StatusCode(code) => ReadmeError::Fetch {
                    url: url.to_string(),
                    reason: format!("server responded with status {code}"),
                },
                other => ReadmeError::Fetch {
                    url: url.to_string(),
                    reason: format!("HTTP request failed: {other}"),
                },
            })?;

        response
            .into_body()
            .read_to_string()
            .map_err(|e| ReadmeError::Fetch {
                url: url.to_string(),
                reason: format!("Failed to read response body: {e}"),
            })
    }
}
