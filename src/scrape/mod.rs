// src/scrape/mod.rs
//! Network side of the app: fetch pages (through `core::net::Fetch`),
//! hand them to `specs` for parsing, and fan out over a bounded pool.
pub mod build;
pub mod catalog;
pub mod pool;
pub mod validate;

pub use build::{BuildReport, build_dataset};
pub use catalog::fetch_glaze_names;
pub use pool::CancelToken;
pub use validate::{ValidationReport, validate_pairs};
