// src/config/options.rs
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub render: RenderOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: s!(USER_AGENT),
        }
    }
}

impl FetchOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Full spoilers with descriptions and tags. Off → names (and ranks) only.
    pub with_descriptions: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { with_descriptions: true }
    }
}
