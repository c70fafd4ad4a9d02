// src/core/net.rs
// Blocking HTTP GET (reqwest), plus an in-memory page source for offline runs.

use std::collections::HashMap;

use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::config::NetOptions;
use crate::error::{Result, ScrapeError};

/// Where page bodies come from. Everything above this seam only sees HTML text.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(net: &NetOptions) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(net.user_agent.as_str())
            .timeout(net.timeout);
        if !net.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|source| ScrapeError::Network { url: s!("<client>"), source })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        let t = std::time::Instant::now();
        let network = |source| ScrapeError::Network { url: url.to_string(), source };

        let resp = self.client.get(url.as_str()).send().map_err(network)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: url.to_string(), status: status.as_u16() });
        }
        let body = resp.text().map_err(network)?;

        debug!(%url, bytes = body.len(), elapsed = ?t.elapsed(), "fetched");
        Ok(body)
    }
}

/// Serves pages from memory, keyed by absolute URL. Unknown URLs are an error.
#[derive(Clone, Debug, Default)]
pub struct FixtureFetcher {
    pages: HashMap<String, String>,
}

impl FixtureFetcher {
    pub fn new() -> Self { Self::default() }

    pub fn with_page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.insert(url, html);
        self
    }

    pub fn insert(&mut self, url: &str, html: impl Into<String>) {
        // Key by the parsed form so "http://h" and "http://h/" agree.
        let key = Url::parse(url).map(|u| u.to_string()).unwrap_or_else(|_| s!(url));
        self.pages.insert(key, html.into());
    }
}

impl Fetch for FixtureFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| ScrapeError::NoFixture(url.to_string()))
    }
}
