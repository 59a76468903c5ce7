//! Integration tests for the scraping core
//!
//! These tests use wiremock to stand in for the origin site and exercise
//! the fetch + extraction pipeline end-to-end.

mod scrape_tests;
