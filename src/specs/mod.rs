// src/specs/mod.rs
//! # Scraping "specs"
//!
//! Page-specific parsing for the vendor's layering site. Each spec knows
//! *where the data lives in one page's HTML* and nothing else.
//!
//! ## What lives here
//! - **Pure HTML parsing** of an already fetched document (`&str` in,
//!   plain values out). No networking, no caching, no GUI state.
//! - **Selector choice** for each page, as CSS selectors via `scraper`.
//! - **Tolerant extraction**: whitespace is normalized, empty and
//!   placeholder values are skipped, relative links are resolved.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → scrape::{catalog, validate, build} → Fetch::get_text
//!                                              ↘  specs::<page>::parse_*
//! ```
//!
//! ## Current specs
//! - `layering`    – glaze names from the search form's `<select>` options.
//! - `listing`     – combination cards and pagination of `?top=`/`?bottom=` pages.
//! - `combination` – the hero image of one `<top>-over-<bottom>` page.
//!
//! Specs are tested offline against small HTML fixtures.

use scraper::Selector;

use crate::error::{Error, Result};

pub mod combination;
pub mod layering;
pub mod listing;

pub(crate) fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector { css, message: e.to_string() })
}
