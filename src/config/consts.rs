// src/config/consts.rs

// Net config
pub const LAYERING_URL: &str = "https://amaco.com/resources/layering";
pub const DEFAULT_PROXY: &str = "https://api.allorigins.win/raw?url=";
pub const USER_AGENT: &str = concat!("amacombos/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 20;

// Local store
pub const STORE_DIR: &str = ".store";
pub const DATASET_FILE: &str = "glaze_combinations.json";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV: &str = "AMACOMBOS_LOG";

// Dataset builder
pub const BUILD_GLAZE_LIMIT: usize = 10;
pub const MAX_LISTING_PAGES: u32 = 40;

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
