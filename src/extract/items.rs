//! Featured and grid title-item extraction
//!
//! Both extractors scan anchor cascades, derive a title per anchor, pick a
//! poster from a nested image, and deduplicate by slug keeping the first
//! occurrence. They differ in their selector tiers, candidate caps, and
//! poster attribute preference.

use crate::catalog::{Image, TitleItem};
use crate::extract::cascade::Cascade;
use crate::extract::text::element_text;
use crate::url::{absolutize, slugify};
use scraper::{ElementRef, Selector};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Candidate anchors scanned per featured extraction
const FEATURED_SCAN_CAP: usize = 60;
/// Featured items emitted after deduplication
const FEATURED_CAP: usize = 20;
/// Candidate anchors scanned per grid extraction
const GRID_SCAN_CAP: usize = 300;

fn featured_anchors() -> &'static Cascade {
    static CASCADE: OnceLock<Cascade> = OnceLock::new();
    CASCADE.get_or_init(|| {
        Cascade::new(&[
            ".featured a[href]",
            ".slider a[href]",
            ".carousel a[href]",
            "a.featured",
        ])
    })
}

fn grid_anchors() -> &'static Cascade {
    static CASCADE: OnceLock<Cascade> = OnceLock::new();
    CASCADE.get_or_init(|| {
        Cascade::new(&[
            "a[href][title]",
            ".item a[href]",
            ".poster a[href]",
            ".thumb a[href]",
            "a.poster",
            "a.item",
        ])
    })
}

fn img_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("img").expect("static selector"))
}

/// Extracts featured/slider/carousel items from a page
///
/// Poster preference: `data-src` then `src` on the anchor's nested image.
/// Output is deduplicated by slug (first occurrence wins) and truncated
/// to 20 items.
pub fn extract_featured(root: ElementRef, base_url: &str) -> Vec<TitleItem> {
    let anchors = featured_anchors().select_capped(root, FEATURED_SCAN_CAP);
    let mut items: Vec<TitleItem> = anchors
        .into_iter()
        .filter_map(|a| anchor_to_item(a, base_url, &["data-src", "src"], false))
        .collect();
    dedup_by_slug(&mut items);
    items.truncate(FEATURED_CAP);
    items
}

/// Extracts grid listing items from a page or container fragment
///
/// Used for sections, search results, and fallback listings. Poster
/// preference: `data-src`, then `srcset` (first URL token), then `src`.
/// Output is deduplicated by slug; callers apply their own truncation.
pub fn extract_grid_items(root: ElementRef, base_url: &str) -> Vec<TitleItem> {
    let anchors = grid_anchors().select_capped(root, GRID_SCAN_CAP);
    let mut items: Vec<TitleItem> = anchors
        .into_iter()
        .filter_map(|a| anchor_to_item(a, base_url, &["data-src", "srcset", "src"], true))
        .collect();
    dedup_by_slug(&mut items);
    items
}

/// Builds a TitleItem from one anchor, or skips it (missing href)
fn anchor_to_item(
    anchor: ElementRef,
    base_url: &str,
    poster_attrs: &[&str],
    pick_srcset_token: bool,
) -> Option<TitleItem> {
    let href = anchor.value().attr("href")?;
    if href.is_empty() {
        return None;
    }

    let title = anchor
        .value()
        .attr("title")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .or_else(|| element_text(anchor))
        .unwrap_or_else(|| href.to_string());

    let mut item = TitleItem::new(slugify(href), title);

    if let Some(poster) = first_image_attr(anchor, poster_attrs) {
        let poster = if pick_srcset_token {
            pick_from_srcset(&poster).to_string()
        } else {
            poster
        };
        item.poster = Some(Image::new(absolutize(base_url, &poster)));
    }

    Some(item)
}

/// First non-empty value among `attrs` on the anchor's first nested image
fn first_image_attr(anchor: ElementRef, attrs: &[&str]) -> Option<String> {
    let img = anchor.select(img_selector()).next()?;
    for attr in attrs {
        if let Some(value) = img.value().attr(attr) {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Picks the first URL token out of a srcset-style value
fn pick_from_srcset(src: &str) -> &str {
    match src.split(',').next() {
        Some(first) => first.split_whitespace().next().unwrap_or(src),
        None => src,
    }
}

/// Removes later duplicates sharing a slug, preserving insertion order
fn dedup_by_slug(items: &mut Vec<TitleItem>) {
    let mut seen: HashSet<String> = HashSet::new();
    items.retain(|item| seen.insert(item.slug.clone()));
}
