//! Catalog scraper orchestration
//!
//! Maps the five public operations onto the bounded fetch client and the
//! extraction engine. Non-2xx origin responses fail the operation; markup
//! that yields nothing is absorbed as empty data.

use crate::catalog::{
    HomeResponse, Image, Section, StreamResponse, TitleDetails, TitleItem, VideoStream,
};
use crate::extract::{
    extract_episodes, extract_featured, extract_grid_items, extract_inline_streams,
    extract_sections, extract_title_page, find_episode_href, find_stream_token, visible_text,
};
use crate::fetch::{FetchedResponse, HttpClient};
use crate::url::absolutize;
use scraper::Html;
use std::sync::Arc;

/// Orchestrates fetching and extraction for one catalog site
///
/// Holds a handle to the shared [`HttpClient`]; all caches live there.
/// Every operation builds its response from freshly parsed HTML.
pub struct CatalogScraper {
    http: Arc<HttpClient>,
    base_url: String,
}

impl CatalogScraper {
    /// Creates a scraper for the site rooted at `base_url`
    pub fn new(http: Arc<HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetches the home feed: featured carousel plus named sections
    pub async fn fetch_home(&self) -> crate::Result<HomeResponse> {
        let resp = self.http.get(&self.base_url).await?;
        self.ensure_success(&self.base_url, &resp)?;

        let doc = Html::parse_document(&resp.body);
        let root = doc.root_element();
        Ok(HomeResponse {
            featured: extract_featured(root, &self.base_url),
            sections: extract_sections(root, &self.base_url),
        })
    }

    /// Fetches only the named sections of the home page
    pub async fn fetch_sections(&self) -> crate::Result<Vec<Section>> {
        let resp = self.http.get(&self.base_url).await?;
        self.ensure_success(&self.base_url, &resp)?;

        let doc = Html::parse_document(&resp.body);
        Ok(extract_sections(doc.root_element(), &self.base_url))
    }

    /// Searches the catalog, trying each known search URL form in order
    ///
    /// Stops at the first form producing a non-empty item list. Individual
    /// per-URL failures are logged and skipped; an exhausted cascade
    /// returns an empty list rather than an error.
    pub async fn search(&self, query: &str) -> crate::Result<Vec<TitleItem>> {
        let search_urls = [
            format!("{}?s={}", self.base_url, query),
            format!("{}/search/{}", self.base_url.trim_end_matches('/'), query),
        ];

        for url in &search_urls {
            match self.http.get(url).await {
                Ok(resp) if resp.status == 200 => {
                    let doc = Html::parse_document(&resp.body);
                    let items = extract_grid_items(doc.root_element(), &self.base_url);
                    if !items.is_empty() {
                        return Ok(items);
                    }
                }
                Ok(resp) => {
                    tracing::debug!("search form {} returned status {}", url, resp.status);
                }
                Err(e) => {
                    tracing::warn!("search attempt failed for {}: {}", url, e);
                }
            }
        }

        Ok(Vec::new())
    }

    /// Fetches full details for one title slug
    pub async fn fetch_title(&self, slug: &str) -> crate::Result<TitleDetails> {
        let url = self.http.absolute(&self.base_url, slug);
        let resp = self.http.get(&url).await?;
        self.ensure_success(&url, &resp)?;

        let doc = Html::parse_document(&resp.body);
        let root = doc.root_element();
        let page = extract_title_page(root);
        let episodes = extract_episodes(root);

        let mut item = TitleItem::new(slug, page.title.unwrap_or_else(|| slug.to_string()));
        item.year = page.year;
        item.rating = page.rating;
        item.poster = page
            .poster
            .map(|p| Image::new(absolutize(&self.base_url, &p)));

        Ok(TitleDetails {
            item,
            synopsis: page.synopsis,
            genres: page.genres,
            episodes,
        })
    }

    /// Resolves playable streams for a title, optionally for one episode
    ///
    /// When an episode id is supplied and its link resolves to a page with
    /// a stream URL, that single result replaces everything found inline
    /// on the title page (an override, not a union).
    pub async fn resolve_stream(
        &self,
        slug: &str,
        episode_id: Option<&str>,
    ) -> crate::Result<StreamResponse> {
        let url = self.http.absolute(&self.base_url, slug);
        let resp = self.http.get(&url).await?;
        self.ensure_success(&url, &resp)?;

        let (mut streams, episode_href) = {
            let doc = Html::parse_document(&resp.body);
            let root = doc.root_element();
            let streams = extract_inline_streams(root, &self.base_url);
            let href = episode_id.and_then(|id| find_episode_href(root, id));
            (streams, href)
        };

        if let Some(href) = episode_href {
            let ep_url = self.http.absolute(&self.base_url, &href);
            let ep_resp = self.http.get(&ep_url).await?;
            if ep_resp.status == 200 {
                let found = {
                    let doc = Html::parse_document(&ep_resp.body);
                    find_stream_token(&visible_text(doc.root_element()))
                };
                if let Some(stream_url) = found {
                    streams = vec![VideoStream::new(absolutize(&self.base_url, &stream_url))];
                }
            }
        }

        Ok(StreamResponse {
            item_id: slug.to_string(),
            streams,
        })
    }

    fn ensure_success(&self, url: &str, resp: &FetchedResponse) -> crate::Result<()> {
        if resp.is_success() {
            Ok(())
        } else {
            Err(crate::AcervoError::Status {
                url: url.to_string(),
                status: resp.status,
            })
        }
    }
}
