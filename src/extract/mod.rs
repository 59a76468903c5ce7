//! Markup extraction engine
//!
//! Pure, side-effect-free transformations from parsed HTML to catalog
//! entities. Every extractor is best-effort: a selector cascade that finds
//! nothing yields an empty/unset field, never an error. Cascades are
//! ordered strategy lists: the first tier that yields anything wins, and
//! results are never merged across tiers within one extraction call.

mod cascade;
mod episodes;
mod items;
mod sections;
mod streams;
mod text;
mod title;

pub use cascade::Cascade;
pub use episodes::extract_episodes;
pub use items::{extract_featured, extract_grid_items};
pub use sections::extract_sections;
pub use streams::{extract_inline_streams, find_episode_href, find_stream_token};
pub use text::{element_text, parse_rating, parse_year, visible_text};
pub use title::{extract_title_page, TitlePage};
