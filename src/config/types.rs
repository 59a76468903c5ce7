use serde::Deserialize;

/// Main configuration structure for Acervo
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub scrape: ScrapeConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Scraper behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeConfig {
    /// Base URL of the catalog site, e.g. "https://acteia.ca/br"
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// User-Agent header sent on every origin request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Optional static Cookie header for authenticated access
    #[serde(rename = "auth-cookie", default)]
    pub auth_cookie: Option<String>,

    /// Whether to honor the origin's robots.txt
    #[serde(rename = "respect-robots", default = "default_respect_robots")]
    pub respect_robots: bool,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs", default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum number of concurrent in-flight origin requests
    #[serde(rename = "max-concurrency", default = "default_max_concurrency")]
    pub max_concurrency: u32,
}

/// Response cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Seconds before a cached response expires
    #[serde(rename = "ttl-secs", default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,

    /// Maximum number of cached responses before oldest-first eviction
    #[serde(rename = "max-entries", default = "default_cache_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl_secs(),
            max_entries: default_cache_max_entries(),
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/125.0 Safari/537.36"
        .to_string()
}

fn default_respect_robots() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_max_concurrency() -> u32 {
    6
}

fn default_cache_ttl_secs() -> u64 {
    600
}

fn default_cache_max_entries() -> usize {
    2048
}
