//! Runtime configuration for the tracker.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// Rows returned when the caller does not ask for a size.
    pub default_top_size: i64,
    /// Hard ceiling on the requested leaderboard size.
    pub max_top_size: i64,
    /// Redis TTL for cached leaderboards (seconds).
    pub leaderboard_cache_ttl: u64,
}

impl Settings {
    fn from_env() -> Self {
        let default_top_size = env::var("DEFAULT_TOP_SIZE")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(10);

        let max_top_size = env::var("MAX_TOP_SIZE")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(100);

        let leaderboard_cache_ttl = env::var("LEADERBOARD_CACHE_TTL")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        Settings {
            default_top_size,
            max_top_size,
            leaderboard_cache_ttl,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
