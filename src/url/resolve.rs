//! Relative-to-absolute URL resolution

use url::Url;

/// Resolves a possibly-relative path against a base URL
///
/// Standard URL-join semantics: absolute URLs pass through, scheme-relative
/// URLs adopt the base's scheme, path-relative URLs resolve against the
/// base path. When the base fails to parse or the join fails, the path is
/// returned unchanged rather than erroring; callers treat the result as
/// best-effort.
pub fn absolutize(base: &str, path: &str) -> String {
    match Url::parse(base).and_then(|b| b.join(path)) {
        Ok(joined) => joined.to_string(),
        Err(_) => path.to_string(),
    }
}
