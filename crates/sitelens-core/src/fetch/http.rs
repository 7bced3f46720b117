//! Manifest GET over libcurl.

use std::time::Duration;

use super::{FetchError, FetchOptions, ManifestFetcher};

/// Fetches manifests with a libcurl easy handle. Runs in the calling thread.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    opts: FetchOptions,
}

impl CurlFetcher {
    pub fn new(opts: FetchOptions) -> Self {
        Self { opts }
    }
}

impl ManifestFetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.opts.max_redirections)?;
        easy.connect_timeout(Duration::from_secs(self.opts.connect_timeout_secs))?;
        easy.timeout(Duration::from_secs(self.opts.timeout_secs))?;
        if let Some(ua) = &self.opts.user_agent {
            easy.useragent(ua)?;
        }

        let mut list = curl::easy::List::new();
        list.append("Accept: application/json")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        tracing::debug!(url, status = code, bytes = body.len(), "manifest response");
        if !(200..300).contains(&code) {
            return Err(FetchError::HttpStatus(code));
        }
        Ok(body)
    }
}
