//! Robots.txt handling module
//!
//! Fetches and memoizes robots.txt per origin, and answers allow/deny for a
//! request path. The policy here is intentionally naive and fail-open: an
//! unreachable or non-200 robots.txt allows everything, and only literal
//! `Disallow:` prefix rules are honored.

mod cache;
mod parser;

pub use cache::RobotsCache;
pub use parser::path_allowed;
