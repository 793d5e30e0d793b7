//! URL handling module for Table-Scout
//!
//! Turns raw hrefs into canonical absolute URLs and decides whether they
//! stay inside the crawl boundary (domain, file extensions, excluded paths).
//! Everything here is pure: no network access, no shared state.

mod filter;
mod matcher;
mod normalize;

pub use filter::UrlFilter;
pub use matcher::matches_domain;
pub use normalize::{canonicalize, canonicalize_str, normalize_and_filter};
