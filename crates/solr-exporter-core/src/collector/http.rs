//! reqwest-backed transport.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::trace;

use super::traits::{FetchError, Transport};

/// Blocking HTTP client with one deadline for connect and the whole request.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(concat!("solr-exporter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        trace!(url, "GET");
        let response = self.client.get(url).send().map_err(|e| FetchError::Request {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| FetchError::Body {
                url: url.to_string(),
                message: e.to_string(),
            })
    }
}
