//! Catalog entities served by the JSON API
//!
//! Plain structured records, immutable once the extraction engine has
//! built them. Every entity is created fresh per request from freshly
//! parsed HTML; nothing here persists beyond the response.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An image reference with an absolute URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            width: None,
            height: None,
        }
    }
}

/// A playable stream URL with optional delivery metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoStream {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl VideoStream {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            quality: None,
            mime_type: None,
            headers: None,
        }
    }
}

/// A single episode of a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<Image>,
}

/// A catalog title (movie, series, anime)
///
/// `id` always equals `slug`; the slug is derived deterministically from
/// the hyperlink path that announced the title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleItem {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl TitleItem {
    /// Creates a title with `id == slug` and all optional fields unset
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            id: slug.clone(),
            slug,
            title: title.into(),
            year: None,
            kind: None,
            poster: None,
            backdrop: None,
            rating: None,
        }
    }
}

/// A named, ordered group of titles on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub items: Vec<TitleItem>,
}

/// The home feed: featured carousel plus named sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeResponse {
    pub featured: Vec<TitleItem>,
    pub sections: Vec<Section>,
}

/// Search results for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub items: Vec<TitleItem>,
}

/// Full details for one title page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleDetails {
    pub item: TitleItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

/// Resolved streams for one title (or one of its episodes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamResponse {
    pub item_id: String,
    pub streams: Vec<VideoStream>,
}
