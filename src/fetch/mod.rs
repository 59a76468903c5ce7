//! Bounded HTTP fetch layer
//!
//! All origin traffic goes through [`HttpClient`]: robots.txt enforcement,
//! a short-TTL response cache, and a global in-flight concurrency limiter,
//! in that order. Ordinary HTTP failures (4xx/5xx) are returned as normal
//! responses; only transport-level failures surface as errors.

mod cache;
mod client;

pub use cache::TtlCache;
pub use client::{FetchedResponse, HttpClient};
