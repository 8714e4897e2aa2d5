use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Blog backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Collection endpoint (e.g., "http://localhost:3001/blogs").
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Staleness windows for cached reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long the article list stays fresh (default: 60).
    #[serde(default = "default_list_stale_seconds")]
    pub list_stale_seconds: u64,
    /// How long a single article stays fresh (default: 0).
    #[serde(default)]
    pub detail_stale_seconds: u64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Scheme and host used for shareable links.
    #[serde(default = "default_link_base")]
    pub link_base: String,
}

fn default_base_url() -> String {
    "http://localhost:3001/blogs".to_string()
}

fn default_list_stale_seconds() -> u64 {
    60
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_link_base() -> String {
    "blogview://home".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            list_stale_seconds: default_list_stale_seconds(),
            detail_stale_seconds: 0,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            link_base: default_link_base(),
        }
    }
}
