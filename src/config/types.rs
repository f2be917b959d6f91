use serde::{Deserialize, Serialize};

use crate::ui::list::DEFAULT_MIN_RATING;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the restaurant collection is fetched from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// HTTP(S) URL or path to a local JSON file.
    #[serde(default = "default_location")]
    pub location: String,
    /// Total timeout for the initial fetch, in seconds (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw / input poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Threshold used by the "top rated" filter (default: 4.5).
    #[serde(default = "default_min_rating")]
    pub min_rating: f64,
}

fn default_location() -> String {
    "http://localhost:3000/restaurants".to_string()
}

fn default_timeout_seconds() -> u32 {
    10
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_min_rating() -> f64 {
    DEFAULT_MIN_RATING
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            min_rating: default_min_rating(),
        }
    }
}
