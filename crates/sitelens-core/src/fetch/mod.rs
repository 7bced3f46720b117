//! Network boundary: one HTTP GET of the manifest URL.
//!
//! The pipeline only depends on [`ManifestFetcher`]; [`CurlFetcher`] is the
//! production implementation. Fetchers are blocking and are driven from
//! `tokio::task::spawn_blocking` by the pipeline.

mod error;
mod http;

pub use error::{FailureKind, FetchError};
pub use http::CurlFetcher;

use crate::config::HttpConfig;

/// Transport knobs for [`CurlFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
    pub max_redirections: u32,
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from(&HttpConfig::default())
    }
}

impl From<&HttpConfig> for FetchOptions {
    fn from(cfg: &HttpConfig) -> Self {
        Self {
            connect_timeout_secs: cfg.connect_timeout_secs,
            timeout_secs: cfg.timeout_secs,
            max_redirections: cfg.max_redirections,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// Source of raw manifest bodies.
pub trait ManifestFetcher: Send + Sync {
    /// Performs the GET and returns the body of a 2xx response.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_http_config() {
        let cfg = HttpConfig {
            connect_timeout_secs: 3,
            timeout_secs: 7,
            max_redirections: 2,
            user_agent: Some("sitelens-test".into()),
        };
        let opts = FetchOptions::from(&cfg);
        assert_eq!(opts.connect_timeout_secs, 3);
        assert_eq!(opts.timeout_secs, 7);
        assert_eq!(opts.max_redirections, 2);
        assert_eq!(opts.user_agent.as_deref(), Some("sitelens-test"));
    }

    #[test]
    fn unreachable_host_is_network_error() {
        let fetcher = CurlFetcher::new(FetchOptions {
            connect_timeout_secs: 2,
            timeout_secs: 2,
            ..FetchOptions::default()
        });
        // Port 9 on localhost is almost never listening.
        let err = fetcher.fetch("http://127.0.0.1:9/site.json").unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }

    #[test]
    fn invalid_url_is_network_error() {
        let err = CurlFetcher::default().fetch("http://[not-closed/site.json").unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
