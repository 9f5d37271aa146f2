//! HTTP client for the remote URL-to-image rendering service.
//!
//! The service is a plain GET endpoint: the target page URL, render
//! dimensions, and output format all travel as query parameters, and the
//! response body is the raw image. Nothing is parsed locally; rendering
//! happens entirely on the remote side.

use crate::{Error, FetchConfig, Renderer, Result, Viewport};
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

// Rendering directive: only capture once the page reports itself loaded
const WAIT_UNTIL: &str = "page_loaded";
const IMAGE_FORMAT: &str = "jpeg";

/// Renderer backed by a remote URL-to-image HTTP service
pub struct ApiRenderer {
    client: Client,
    endpoint: Url,
    access_key: String,
    viewport: Viewport,
    quality: u8,
    user_agent: String,
}

impl ApiRenderer {
    /// Build a renderer from the run configuration.
    ///
    /// Fails if the endpoint is not a valid absolute URL or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            Error::Config(format!("Invalid endpoint {}: {}", config.endpoint, e))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::Init(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            access_key: config.access_key.clone(),
            viewport: config.viewport,
            quality: config.quality,
            user_agent: config.user_agent.clone(),
        })
    }

    /// Full request URL for a target page; the query-pair encoder
    /// percent-encodes the target URL.
    fn request_url(&self, target: &str) -> Url {
        let mut api_url = self.endpoint.clone();
        api_url
            .query_pairs_mut()
            .append_pair("access_key", &self.access_key)
            .append_pair("wait_until", WAIT_UNTIL)
            .append_pair("url", target)
            .append_pair("width", &self.viewport.width.to_string())
            .append_pair("height", &self.viewport.height.to_string())
            .append_pair("format", IMAGE_FORMAT)
            .append_pair("quality", &self.quality.to_string());
        api_url
    }
}

impl Renderer for ApiRenderer {
    fn render(&self, url: &str) -> Result<Vec<u8>> {
        let api_url = self.request_url(url);
        log::debug!("GET {}", api_url);

        let resp = self
            .client
            .get(api_url)
            .header("User-Agent", self.user_agent.clone())
            .send()
            .map_err(|e| Error::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Request(format!("HTTP {}", status.as_u16())));
        }

        let bytes = resp
            .bytes()
            .map_err(|e| Error::Request(format!("Failed to read response body: {}", e)))?;

        Ok(bytes.to_vec())
    }
}
