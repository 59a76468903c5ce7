//! Acervo: a media-catalog scraping core
//!
//! This crate turns one target catalog website into a typed JSON data source.
//! It fetches HTML through a caching, concurrency-bounded HTTP client that
//! honors robots.txt, and runs tolerant selector-cascade extraction over the
//! fragile markup to produce home feeds, sections, search results, title
//! details, and playable stream URLs.

pub mod catalog;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Main error type for Acervo operations
#[derive(Debug, Error)]
pub enum AcervoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Origin returned status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Acervo operations
pub type Result<T> = std::result::Result<T, AcervoError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use catalog::{
    CatalogScraper, Episode, HomeResponse, Image, SearchResponse, Section, StreamResponse,
    TitleDetails, TitleItem, VideoStream,
};
pub use config::Config;
pub use fetch::{FetchedResponse, HttpClient};
pub use robots::RobotsCache;
pub use url::{absolutize, slugify};
