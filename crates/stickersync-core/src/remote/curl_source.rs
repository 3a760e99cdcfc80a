//! libcurl-backed `RemoteSource`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::RemoteSource;
use crate::error::SyncError;

/// Transfer limits applied to every GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpOptions {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 120,
        }
    }
}

/// Performs blocking GETs with a fresh curl easy handle per request.
#[derive(Debug, Clone, Default)]
pub struct CurlSource {
    opts: HttpOptions,
}

impl CurlSource {
    pub fn new(opts: HttpOptions) -> Self {
        Self { opts }
    }
}

impl RemoteSource for CurlSource {
    fn get(&self, url: &str) -> Result<Vec<u8>, SyncError> {
        let curl_err = |source: curl::Error| SyncError::Curl {
            url: url.to_string(),
            source,
        };

        let mut body = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(curl_err)?;
        easy.follow_location(true).map_err(curl_err)?;
        easy.max_redirections(10).map_err(curl_err)?;
        easy.connect_timeout(Duration::from_secs(self.opts.connect_timeout_secs))
            .map_err(curl_err)?;
        easy.timeout(Duration::from_secs(self.opts.timeout_secs))
            .map_err(curl_err)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(curl_err)?;
            transfer.perform().map_err(curl_err)?;
        }

        let status = easy.response_code().map_err(curl_err)?;
        if !(200..300).contains(&status) {
            return Err(SyncError::Http {
                url: url.to_string(),
                status,
            });
        }
        tracing::debug!(url, bytes = body.len(), "GET complete");
        Ok(body)
    }
}
