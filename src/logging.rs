//! Tracing subscriber setup.
//!
//! The terminal is in raw mode for the whole session, so log output goes to
//! `aidfind.log` under the data directory instead of stderr. `AIDFIND_LOG`
//! selects the filter (`tracing_subscriber` env-filter syntax).

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_FILE: &str = "aidfind.log";
const FILTER_ENV: &str = "AIDFIND_LOG";

/// Install the global subscriber. Call once, before the UI starts.
pub fn initialize() -> Result<()> {
    let dir = app_dirs::get_data_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
