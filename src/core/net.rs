// src/core/net.rs
// Blocking HTTP GET for the scraper threads.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};

use crate::config::consts::USER_AGENT;
use crate::config::options::NetOptions;
use crate::error::{Error, Result};

/// Anything that can turn a URL into a response body.
/// Workers share one through an `Arc`, so it must be thread-safe.
pub trait Fetch: Send + Sync {
    fn get_text(&self, url: &str) -> Result<String>;
}

pub struct HttpFetch {
    client: Client,
}

impl HttpFetch {
    pub fn new(net: &NetOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        // Some relays refuse requests that don't look like XHR
        headers.insert("x-requested-with", HeaderValue::from_static("XMLHttpRequest"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(net.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetch {
    fn get_text(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { status: status.as_u16(), url: s!(url) });
        }
        Ok(resp.text()?)
    }
}
