// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{EnvFilter, fmt::time};

use crate::config::consts::{LOG_ENV, LOG_FILE, STORE_DIR};

static INIT: OnceLock<()> = OnceLock::new();

/// Route `logf!`/`logd!`/`logw!`/`loge!` into `.store/debug.log`.
/// Safe to call more than once; a log file that cannot be opened just
/// means no logging.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

        if fs::create_dir_all(STORE_DIR).is_err() {
            return;
        }
        let path = Path::new(STORE_DIR).join(LOG_FILE);
        let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .with_timer(time::uptime())
            .try_init();
    });
}
