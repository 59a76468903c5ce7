//! Playable stream resolution
//!
//! Inline `<source>` elements are the primary signal; a text scan for a
//! stream-shaped URL is the fallback. Episode-specific pages are handled by
//! the orchestration layer, which uses [`find_episode_href`] here to locate
//! the link to follow.

use crate::catalog::VideoStream;
use crate::url::absolutize;
use regex::Regex;
use scraper::{ElementRef, Selector};
use std::sync::OnceLock;

fn source_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("video source[src], source[src]").expect("static selector"))
}

fn stream_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"https?://[^'"\s]+\.(?:m3u8|mp4)"#).expect("static regex"))
}

/// Collects candidate streams from inline `<source>` elements
///
/// Only sources whose `src` contains `.m3u8` or `.mp4` qualify. When no
/// source matches, the page's visible text is scanned for the first
/// stream-shaped URL token instead.
pub fn extract_inline_streams(root: ElementRef, base_url: &str) -> Vec<VideoStream> {
    let mut streams: Vec<VideoStream> = Vec::new();

    for source in root.select(source_selector()) {
        let Some(src) = source.value().attr("src") else {
            continue;
        };
        if !src.contains(".m3u8") && !src.contains(".mp4") {
            continue;
        }
        let mut stream = VideoStream::new(absolutize(base_url, src));
        stream.mime_type = source.value().attr("type").map(str::to_string);
        streams.push(stream);
    }

    if streams.is_empty() {
        let text = crate::extract::text::visible_text(root);
        if let Some(url) = find_stream_token(&text) {
            streams.push(VideoStream::new(absolutize(base_url, &url)));
        }
    }

    streams
}

/// Finds the first `.m3u8`/`.mp4` URL token in free text
pub fn find_stream_token(text: &str) -> Option<String> {
    stream_url_re().find(text).map(|m| m.as_str().to_string())
}

/// Finds the href of the first anchor mentioning an episode identifier
///
/// The identifier is interpolated into an attribute-substring selector;
/// identifiers that break the selector syntax simply find nothing.
pub fn find_episode_href(root: ElementRef, episode_id: &str) -> Option<String> {
    let selector = Selector::parse(&format!("a[href*='{}']", episode_id)).ok()?;
    root.select(&selector)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
}
