// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = concat!("sheet_scrape/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

// Logging
pub const LOG_DIR: &str = ".sheet_scrape";
pub const LOG_FILE: &str = "debug.log";

// Render
/// Wraps an item's rank so forum right-to-left runs don't swallow the parens.
pub const LRM: char = '\u{200E}';
pub const LOADING: &str = "Loading...";
