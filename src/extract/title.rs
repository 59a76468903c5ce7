//! Single-title page extraction
//!
//! Pulls the display title, synopsis, poster, year, rating, and genre list
//! out of a title page. Year and rating are scanned from whole-page visible
//! text; both are best-effort heuristics.

use crate::extract::cascade::Cascade;
use crate::extract::text::{parse_rating, parse_year, visible_text};
use scraper::ElementRef;
use std::sync::OnceLock;

fn title_headings() -> &'static Cascade {
    static CASCADE: OnceLock<Cascade> = OnceLock::new();
    CASCADE.get_or_init(|| Cascade::new(&["h1", "h2.entry-title", ".title", ".post-title"]))
}

fn synopsis_blocks() -> &'static Cascade {
    static CASCADE: OnceLock<Cascade> = OnceLock::new();
    CASCADE.get_or_init(|| Cascade::new(&[".synopsis", ".description", ".entry-content p"]))
}

fn poster_images() -> &'static Cascade {
    static CASCADE: OnceLock<Cascade> = OnceLock::new();
    CASCADE.get_or_init(|| {
        Cascade::new(&[".poster img", ".thumb img", ".entry-content img", "img"])
    })
}

fn genre_links() -> &'static Cascade {
    static CASCADE: OnceLock<Cascade> = OnceLock::new();
    CASCADE.get_or_init(|| Cascade::new(&[".genres a", ".tags a", "a[rel='tag']"]))
}

/// Raw fields extracted from one title page
///
/// URLs are as found in the markup (possibly relative); the orchestration
/// layer absolutizes and assembles the final entities.
#[derive(Debug, Clone, Default)]
pub struct TitlePage {
    pub title: Option<String>,
    pub synopsis: Option<String>,
    pub poster: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genres: Vec<String>,
}

/// Extracts all title-page fields in one pass
///
/// Every field is optional; a selector cascade that matches nothing leaves
/// its field unset. Genres keep document order and are not deduplicated.
pub fn extract_title_page(root: ElementRef) -> TitlePage {
    let page_text = visible_text(root);

    let genres = genre_links()
        .select_capped(root, usize::MAX)
        .into_iter()
        .filter_map(crate::extract::text::element_text)
        .collect();

    TitlePage {
        title: title_headings().first_text(root),
        synopsis: synopsis_blocks().first_text(root),
        poster: poster_images().first_attr(root, "src"),
        year: parse_year(&page_text),
        rating: parse_rating(&page_text),
        genres,
    }
}
