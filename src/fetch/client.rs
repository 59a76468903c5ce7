//! Concurrency-bounded, caching HTTP client
//!
//! Request flow for every `get`:
//!
//! 1. Robots enforcement (when enabled); denied paths short-circuit with a
//!    synthetic 451 response, touching neither network nor cache.
//! 2. Response cache lookup by exact URL; hits bypass the limiter.
//! 3. Acquire one slot from the global concurrency limiter.
//! 4. Issue the GET with configured headers, timeout, and redirects.
//! 5. Cache 200 responses whose content-type starts with "text".
//!
//! Non-2xx origin responses are returned as ordinary responses, never as
//! errors; callers decide whether they are fatal.

use crate::config::Config;
use crate::fetch::cache::TtlCache;
use crate::robots::RobotsCache;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::Semaphore;

/// A fetched (or synthesized) HTTP response
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers, lowercased names
    pub headers: HashMap<String, String>,
    /// Response body decoded as text
    pub body: String,
}

impl FetchedResponse {
    /// Returns true for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Looks up a header by lowercase name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    fn robots_blocked() -> Self {
        Self {
            status: 451,
            headers: HashMap::new(),
            body: "blocked by robots.txt".to_string(),
        }
    }
}

/// HTTP client bounding all origin traffic for the scraper
///
/// Owns its response cache and robots cache; constructed once at process
/// start and shared by handle across all request-handling code.
pub struct HttpClient {
    client: Client,
    cache: Mutex<TtlCache<FetchedResponse>>,
    robots: RobotsCache,
    limiter: Semaphore,
    respect_robots: bool,
}

impl HttpClient {
    /// Builds a client from configuration
    ///
    /// The user agent, optional static auth cookie, per-request timeout,
    /// and redirect following are fixed here for the client's lifetime.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let mut default_headers = HeaderMap::new();
        if let Some(cookie) = &config.scrape.auth_cookie {
            if let Ok(value) = HeaderValue::from_str(cookie) {
                default_headers.insert(COOKIE, value);
            }
        }

        let client = Client::builder()
            .user_agent(config.scrape.user_agent.clone())
            .default_headers(default_headers)
            .timeout(Duration::from_secs(config.scrape.request_timeout_secs))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            cache: Mutex::new(TtlCache::new(
                Duration::from_secs(config.cache.ttl_secs),
                config.cache.max_entries,
            )),
            robots: RobotsCache::new()?,
            limiter: Semaphore::new(config.scrape.max_concurrency as usize),
            respect_robots: config.scrape.respect_robots,
        })
    }

    /// Fetches a URL through the robots gate, cache, and limiter
    pub async fn get(&self, url: &str) -> crate::Result<FetchedResponse> {
        self.get_with_headers(url, HeaderMap::new()).await
    }

    /// Like [`HttpClient::get`], with extra headers merged over the defaults
    pub async fn get_with_headers(
        &self,
        url: &str,
        headers: HeaderMap,
    ) -> crate::Result<FetchedResponse> {
        if self.respect_robots && !self.robots.allowed(url).await {
            tracing::warn!("Blocked by robots.txt: {}", url);
            return Ok(FetchedResponse::robots_blocked());
        }

        if let Some(cached) = self.cache_get(url) {
            tracing::debug!("Cache hit for {}", url);
            return Ok(cached);
        }

        // The limiter lives as long as self and is never closed; a failed
        // acquire can only happen at shutdown, where limiting no longer
        // matters, so the request proceeds unthrottled.
        let _permit = self.limiter.acquire().await.ok();

        tracing::debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(|source| crate::AcervoError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status().as_u16();
        let resp_headers: HashMap<String, String> = resp
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_lowercase(), v.to_string()))
            })
            .collect();
        let body = resp
            .text()
            .await
            .map_err(|source| crate::AcervoError::Http {
                url: url.to_string(),
                source,
            })?;

        let fetched = FetchedResponse {
            status,
            headers: resp_headers,
            body,
        };

        let is_text = fetched
            .header("content-type")
            .map(|ct| ct.starts_with("text"))
            .unwrap_or(false);
        if fetched.status == 200 && is_text {
            self.cache_put(url.to_string(), fetched.clone());
        }

        Ok(fetched)
    }

    /// Resolves a possibly-relative path against a base URL
    ///
    /// Standard URL-join semantics; falls back to the path itself when the
    /// base does not parse.
    pub fn absolute(&self, base: &str, path: &str) -> String {
        crate::url::absolutize(base, path)
    }

    fn cache_get(&self, url: &str) -> Option<FetchedResponse> {
        match self.cache.lock() {
            Ok(mut cache) => cache.get(url),
            Err(_) => None,
        }
    }

    fn cache_put(&self, url: String, response: FetchedResponse) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(url, response);
        }
    }
}
