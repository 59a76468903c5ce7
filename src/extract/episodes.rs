//! Episode-list extraction
//!
//! Scans episode-list markup patterns and derives an episode per entry
//! anchor. Episode numbers are parsed out of the visible title with a
//! locale-aware pattern; a title that yields no number leaves the field
//! unset rather than failing the extraction.

use crate::catalog::Episode;
use crate::extract::cascade::Cascade;
use crate::extract::text::element_text;
use crate::url::slugify;
use regex::Regex;
use scraper::{ElementRef, Selector};
use std::sync::OnceLock;

/// Placeholder title for entries with no usable text
const EPISODE_PLACEHOLDER: &str = "Episódio";

fn entries() -> &'static Cascade {
    static CASCADE: OnceLock<Cascade> = OnceLock::new();
    CASCADE.get_or_init(|| {
        Cascade::new(&[
            ".episodes li",
            ".episode-list li",
            "ul.episodes li",
            ".ep_list li",
            "a.episode",
        ])
    })
}

fn anchor_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("a").expect("static selector"))
}

fn episode_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(?:Epis[oó]dio|Ep)\s*(\d+)").expect("static regex"))
}

/// Extracts the episode list from a title page
///
/// Entries that resolve no anchor are skipped. Episode ids come from the
/// anchor's href slug, falling back to the title when the href is empty.
pub fn extract_episodes(root: ElementRef) -> Vec<Episode> {
    let mut episodes = Vec::new();

    for entry in entries().select_capped(root, usize::MAX) {
        let anchor = if entry.value().name() == "a" {
            entry
        } else {
            match entry.select(anchor_selector()).next() {
                Some(a) => a,
                None => continue,
            }
        };

        let title = element_text(anchor)
            .or_else(|| {
                anchor
                    .value()
                    .attr("title")
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| EPISODE_PLACEHOLDER.to_string());

        let number = parse_episode_number(&title);

        let href = anchor.value().attr("href").unwrap_or("");
        let id = if href.is_empty() {
            title.clone()
        } else {
            slugify(href)
        };

        episodes.push(Episode {
            id,
            title,
            number,
            season: None,
            thumb: None,
        });
    }

    episodes
}

/// Parses an episode number from a title like "Episódio 7" or "Ep 12"
pub fn parse_episode_number(title: &str) -> Option<u32> {
    episode_number_re()
        .captures(title)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
