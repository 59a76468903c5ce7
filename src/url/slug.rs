//! Slug derivation for catalog identifiers
//!
//! A slug is the path fragment of a hyperlink, used as the stable identifier
//! for titles and episodes across API responses.

use regex::Regex;
use std::sync::OnceLock;

fn host_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^https?://[^/]+").expect("static regex"))
}

/// Derives a slug from a (possibly absolute) href
///
/// Strips any `scheme://host` prefix and surrounding slashes. An empty
/// result defaults to `"root"`. Never fails; pathological input is
/// returned unchanged.
///
/// # Example
///
/// ```
/// use acervo::url::slugify;
///
/// assert_eq!(slugify("https://site.com/movie/foo-bar/"), "movie/foo-bar");
/// assert_eq!(slugify(""), "root");
/// ```
pub fn slugify(href: &str) -> String {
    let stripped = host_prefix().replace(href, "");
    let trimmed = stripped.trim_matches('/');
    if trimmed.is_empty() {
        "root".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Derives a section identifier from a heading
///
/// Lowercased, with whitespace runs collapsed to single hyphens, so a
/// heading like "Em Alta" keys the section as "em-alta".
pub fn heading_slug(heading: &str) -> String {
    let id = heading
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    if id.is_empty() {
        "root".to_string()
    } else {
        id
    }
}
