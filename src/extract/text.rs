//! Text helpers for tolerant value parsing
//!
//! Numeric parsing here is deliberately loose: years and ratings are pulled
//! from whole-page visible text by pattern, and any malformed value leaves
//! the field unset rather than failing extraction.

use regex::Regex;
use scraper::ElementRef;
use std::sync::OnceLock;

fn year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(19|20)\d{2}").expect("static regex"))
}

fn decimal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+(?:[\.,]\d+)?").expect("static regex"))
}

/// Returns an element's trimmed visible text, or `None` when empty
pub fn element_text(element: ElementRef) -> Option<String> {
    let text: String = element.text().collect::<String>();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Collects an element's visible text, nodes joined by single spaces
pub fn visible_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses the first 4-digit year (1900–2099) found in the text
pub fn parse_year(text: &str) -> Option<i32> {
    year_re()
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}

/// Parses the first decimal-looking token found in the text
///
/// A comma decimal separator is normalized to a dot, so "8,5" parses as
/// 8.5. The scan is not field-scoped and can pick up unrelated numbers;
/// callers accept that as a known limitation of scraping untyped pages.
pub fn parse_rating(text: &str) -> Option<f64> {
    decimal_re()
        .find(text)
        .and_then(|m| m.as_str().replace(',', ".").parse().ok())
}
