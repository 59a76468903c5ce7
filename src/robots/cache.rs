//! Per-origin robots.txt cache
//!
//! The first request to an origin fetches its robots.txt once; every later
//! request reads the memoized text for the lifetime of the process. Policy
//! fetch failures resolve to an empty document (fail open).

use crate::robots::parser::path_allowed;
use crate::url::origin_of;
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OnceCell};
use url::Url;

const ROBOTS_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Memoizes robots.txt text per origin and answers allow/deny for URLs
///
/// Concurrent first requests for the same origin are deduplicated: the
/// per-origin cell serializes its initializing fetch, while different
/// origins initialize in parallel. Entries never expire.
pub struct RobotsCache {
    client: Client,
    policies: Mutex<HashMap<String, Arc<OnceCell<String>>>>,
}

impl RobotsCache {
    /// Creates a robots cache with its own short-timeout HTTP client
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(ROBOTS_FETCH_TIMEOUT).build()?;
        Ok(Self {
            client,
            policies: Mutex::new(HashMap::new()),
        })
    }

    /// Checks whether a URL's path is allowed by its origin's robots.txt
    ///
    /// Unparseable URLs are allowed: the policy only ever narrows what a
    /// well-formed request may do.
    pub async fn allowed(&self, url: &str) -> bool {
        let Some(origin) = origin_of(url) else {
            return true;
        };

        let cell = {
            let mut policies = self.policies.lock().await;
            policies.entry(origin.clone()).or_default().clone()
        };

        let robots_txt = cell
            .get_or_init(|| self.fetch_policy(origin))
            .await;

        let path = Url::parse(url)
            .map(|u| u.path().to_string())
            .unwrap_or_else(|_| "/".to_string());
        let path = if path.is_empty() { "/" } else { path.as_str() };

        path_allowed(robots_txt, path)
    }

    /// Fetches an origin's robots.txt, resolving to "" on any failure
    async fn fetch_policy(&self, origin: String) -> String {
        let robots_url = format!("{}/robots.txt", origin);
        match self.client.get(&robots_url).send().await {
            Ok(resp) if resp.status().as_u16() == 200 => {
                resp.text().await.unwrap_or_default()
            }
            Ok(resp) => {
                tracing::debug!(
                    "robots.txt for {} returned status {}, allowing all",
                    origin,
                    resp.status()
                );
                String::new()
            }
            Err(e) => {
                tracing::debug!("robots fetch failed for {}: {}", robots_url, e);
                String::new()
            }
        }
    }
}
