// src/lib.rs

#[macro_use]
pub mod macros;

pub mod catalog;
pub mod combos;
pub mod config;
pub mod core;
pub mod error;
pub mod glaze;
pub mod gui;
pub mod loader;
pub mod log;
pub mod matcher;
pub mod pair;
pub mod progress;
pub mod scrape;
pub mod selection;
pub mod session;
pub mod specs;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
