//! Catalog scraping module
//!
//! Typed catalog entities and the [`CatalogScraper`] orchestrating the
//! fetch layer and the extraction engine into the five public operations:
//! home, sections, search, title details, and stream resolution.

mod scraper;
mod types;

pub use scraper::CatalogScraper;
pub use types::{
    Episode, HomeResponse, Image, SearchResponse, Section, StreamResponse, TitleDetails,
    TitleItem, VideoStream,
};
