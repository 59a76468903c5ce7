//! Home-page section extraction
//!
//! Scans candidate section containers, requires a resolvable heading for
//! each (containers without one are skipped, not defaulted), and runs grid
//! extraction scoped to the container. When nothing qualifies, the whole
//! document becomes a single fallback section.

use crate::catalog::Section;
use crate::extract::cascade::Cascade;
use crate::extract::items::extract_grid_items;
use crate::url::heading_slug;
use scraper::ElementRef;
use std::sync::OnceLock;

/// Candidate containers scanned per page
const SECTION_SCAN_CAP: usize = 20;
/// Items kept per named section
const SECTION_ITEM_CAP: usize = 30;
/// Items kept in the whole-page fallback section
const FALLBACK_ITEM_CAP: usize = 60;

/// Identifier of the fallback section
const FALLBACK_SECTION_ID: &str = "all";
/// Localized display title of the fallback section
const FALLBACK_SECTION_TITLE: &str = "Conteúdo";

fn containers() -> &'static Cascade {
    static CASCADE: OnceLock<Cascade> = OnceLock::new();
    CASCADE.get_or_init(|| {
        Cascade::new(&["section", ".section", ".block", ".home-section", ".module"])
    })
}

fn headings() -> &'static Cascade {
    static CASCADE: OnceLock<Cascade> = OnceLock::new();
    CASCADE.get_or_init(|| Cascade::new(&["h2", "h3", ".section-title", ".widget-title"]))
}

/// Extracts named sections from a page, with a whole-page fallback
///
/// A container becomes a [`Section`] only when it has both a non-empty
/// heading and at least one grid item. Section ids are the lowercased,
/// hyphenated heading text.
pub fn extract_sections(root: ElementRef, base_url: &str) -> Vec<Section> {
    let mut sections = Vec::new();

    for container in containers().select_capped(root, SECTION_SCAN_CAP) {
        let Some(heading) = headings().first_text(container) else {
            continue;
        };
        let mut items = extract_grid_items(container, base_url);
        if items.is_empty() {
            continue;
        }
        items.truncate(SECTION_ITEM_CAP);
        sections.push(Section {
            id: heading_slug(&heading),
            title: heading,
            items,
        });
    }

    if sections.is_empty() {
        let mut items = extract_grid_items(root, base_url);
        if !items.is_empty() {
            items.truncate(FALLBACK_ITEM_CAP);
            sections.push(Section {
                id: FALLBACK_SECTION_ID.to_string(),
                title: FALLBACK_SECTION_TITLE.to_string(),
                items,
            });
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn sections_of(html: &str) -> Vec<Section> {
        let doc = Html::parse_document(html);
        extract_sections(doc.root_element(), "https://site.example/")
    }

    #[test]
    fn test_section_with_heading_and_items() {
        let sections = sections_of(
            r#"<section>
                <h2>Top</h2>
                <a href="/title/xyz" title="Xyz"></a>
            </section>"#,
        );
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, "top");
        assert_eq!(sections[0].title, "Top");
        assert_eq!(sections[0].items[0].slug, "title/xyz");
    }

    #[test]
    fn test_container_without_heading_skipped() {
        let sections = sections_of(
            r#"<section><a href="/title/x" title="X"></a></section>"#,
        );
        // The fallback still picks the items up as a single section.
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, "all");
        assert_eq!(sections[0].title, "Conteúdo");
    }

    #[test]
    fn test_container_without_items_skipped() {
        let sections = sections_of(r#"<section><h2>Empty</h2><p>text only</p></section>"#);
        assert!(sections.is_empty());
    }

    #[test]
    fn test_multi_word_heading_id() {
        let sections = sections_of(
            r#"<div class="section">
                <h3>Em Alta</h3>
                <a href="/t/1" title="One"></a>
            </div>"#,
        );
        assert_eq!(sections[0].id, "em-alta");
    }

    #[test]
    fn test_section_items_capped_at_30() {
        let anchors: String = (0..45)
            .map(|i| format!(r#"<a href="/t/{i}" title="T{i}"></a>"#))
            .collect();
        let sections = sections_of(&format!("<section><h2>Big</h2>{anchors}</section>"));
        assert_eq!(sections[0].items.len(), 30);
    }

    #[test]
    fn test_fallback_capped_at_60() {
        let anchors: String = (0..80)
            .map(|i| format!(r#"<a href="/t/{i}" title="T{i}"></a>"#))
            .collect();
        let sections = sections_of(&anchors);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].items.len(), 60);
    }

    #[test]
    fn test_no_items_anywhere_yields_empty() {
        let sections = sections_of("<p>nothing to see</p>");
        assert!(sections.is_empty());
    }

    #[test]
    fn test_multiple_sections_preserve_order() {
        let sections = sections_of(
            r#"<section><h2>First</h2><a href="/a" title="A"></a></section>
               <section><h2>Second</h2><a href="/b" title="B"></a></section>"#,
        );
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].id, "first");
        assert_eq!(sections[1].id, "second");
    }
}
