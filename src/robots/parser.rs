//! Naive robots.txt directive parsing
//!
//! Deliberately minimal: no per-agent scoping, no wildcards, no `Allow:`
//! overrides. A path is denied only when a non-empty `Disallow:` value is a
//! literal string prefix of it.

/// Checks a request path against a robots.txt document
///
/// # Arguments
///
/// * `robots_txt` - The raw robots.txt text (may be empty)
/// * `path` - The request path to check, e.g. "/private/page"
///
/// # Returns
///
/// * `true` - The path is allowed (or no rule matches)
/// * `false` - A `Disallow:` value prefixes the path
pub fn path_allowed(robots_txt: &str, path: &str) -> bool {
    for line in robots_txt.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let lower = line.to_lowercase();
        if lower.starts_with("user-agent:") {
            // No per-agent scoping; every block applies.
            continue;
        }
        if lower.starts_with("disallow:") {
            if let Some((_, value)) = line.split_once(':') {
                let disallowed = value.trim();
                if !disallowed.is_empty() && path.starts_with(disallowed) {
                    return false;
                }
            }
        }
    }
    true
}
