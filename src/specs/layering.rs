// src/specs/layering.rs
//! Spec for the layering landing page.
//!
//! The search form holds a labelled `<select>` per layer position:
//! ```html
//! <div class="search-glazes">
//!   <label>Top Glaze</label>
//!   <select><option>Select Top Glaze</option><option>Blue Midnight</option>…</select>
//! </div>
//! ```
//! Both selects list the same glazes; the first option of each is a
//! placeholder.

use std::collections::HashSet;

use scraper::Html;

use super::selector;
use crate::core::sanitize::normalize_ws;
use crate::error::Result;

pub const OPTIONS_SELECTOR: &str = "div.search-glazes select option";
pub const PLACEHOLDERS: &[&str] = &["Select Top Glaze", "Select Bottom Glaze"];

/// Glaze names in page order, placeholders and repeats removed.
pub fn parse_glaze_options(doc: &str) -> Result<Vec<String>> {
    let html = Html::parse_document(doc);
    let options = selector(OPTIONS_SELECTOR)?;

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for opt in html.select(&options) {
        let text = normalize_ws(&opt.text().collect::<String>());
        if text.is_empty() || is_placeholder(&text) {
            continue;
        }
        if seen.insert(text.clone()) {
            out.push(text);
        }
    }
    Ok(out)
}

fn is_placeholder(text: &str) -> bool {
    PLACEHOLDERS.iter().any(|p| p.eq_ignore_ascii_case(text)) || text.starts_with("Select ")
}
