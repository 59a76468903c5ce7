//! URL handling module for Acervo
//!
//! Provides slug derivation, absolute-URL resolution, and origin extraction.
//! Everything here is best-effort: malformed input falls back to something
//! usable rather than failing, because these values feed identifiers in
//! scraped API responses.

mod resolve;
mod slug;

pub use resolve::absolutize;
pub use slug::{heading_slug, slugify};

use url::Url;

/// Extracts the origin (`scheme://host[:port]`) of a URL
///
/// Returns `None` when the URL does not parse or has no host.
pub fn origin_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let origin = match parsed.port() {
        Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
        None => format!("{}://{}", parsed.scheme(), host),
    };
    Some(origin)
}
