// tests/common/mod.rs
//
// Offline `Fetch`: canned bodies by exact URL, 404 otherwise.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use amacombos::config::options::NetOptions;
use amacombos::core::net::Fetch;
use amacombos::{Error, Result};

#[derive(Default)]
pub struct FakeFetch {
    pages: HashMap<String, String>,
    pub requests: Mutex<Vec<String>>,
}

impl FakeFetch {
    pub fn new() -> Self { Self::default() }

    pub fn page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetch for FakeFetch {
    fn get_text(&self, url: &str) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Status { status: 404, url: url.to_string() })
    }
}

/// Direct fetches, no pauses.
pub fn offline_net() -> NetOptions {
    NetOptions { proxy: None, pause_ms: 0, workers: 3, ..NetOptions::default() }
}

pub const LAYERING: &str = "https://amaco.com/resources/layering";

pub fn layering_page(names: &[&str]) -> String {
    let options: String = names.iter().map(|n| format!("<option>{n}</option>")).collect();
    format!(
        r#"<div class="search-glazes"><label>Top Glaze</label>
           <select><option>Select Top Glaze</option>{options}</select></div>"#
    )
}

pub fn combination_page(image: &str) -> String {
    format!(r#"<main><img class="lazyload" src="data:," data-src="{image}"></main>"#)
}
