//! Ordered selector-strategy lists
//!
//! A [`Cascade`] holds a prioritized list of CSS selector tiers. Tiers are
//! tried in order and the first tier yielding any match wins outright;
//! later tiers exist only as fallbacks and are never merged in. This keeps
//! each extraction strategy independently testable against a markup
//! fragment.

use crate::extract::text::element_text;
use scraper::{ElementRef, Selector};

/// A prioritized list of pre-parsed CSS selectors
pub struct Cascade {
    tiers: Vec<Selector>,
}

impl Cascade {
    /// Builds a cascade from selector literals
    ///
    /// Intended for statically-known selectors; an unparseable literal is a
    /// programming error and panics at construction.
    pub fn new(selectors: &[&str]) -> Self {
        let tiers = selectors
            .iter()
            .map(|s| Selector::parse(s).expect("static selector"))
            .collect();
        Self { tiers }
    }

    /// Selects elements from the first tier yielding any match, capped
    ///
    /// The cap bounds the candidate scan, not the per-tier attempt: a tier
    /// with a single match still wins over a later tier with hundreds.
    pub fn select_capped<'a>(&self, root: ElementRef<'a>, cap: usize) -> Vec<ElementRef<'a>> {
        for tier in &self.tiers {
            let matches: Vec<ElementRef<'a>> = root.select(tier).take(cap).collect();
            if !matches.is_empty() {
                return matches;
            }
        }
        Vec::new()
    }

    /// Returns the first non-empty visible text any tier yields
    ///
    /// A tier whose matches are all empty-text does not win; the cascade
    /// falls through to the next tier.
    pub fn first_text(&self, root: ElementRef) -> Option<String> {
        for tier in &self.tiers {
            if let Some(text) = root.select(tier).find_map(element_text) {
                return Some(text);
            }
        }
        None
    }

    /// Returns the first non-empty value of `attr` any tier yields
    pub fn first_attr(&self, root: ElementRef, attr: &str) -> Option<String> {
        for tier in &self.tiers {
            for element in root.select(tier) {
                if let Some(value) = element.value().attr(attr) {
                    if !value.trim().is_empty() {
                        return Some(value.trim().to_string());
                    }
                }
            }
        }
        None
    }
}
