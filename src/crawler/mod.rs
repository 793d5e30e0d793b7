//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with per-request timeouts
//! - Static table extraction and page classification
//! - The breadth-first frontier and visited set
//! - Overall crawl orchestration

mod classifier;
mod engine;
mod fetcher;
mod frontier;
mod tables;

pub use classifier::{ClassificationResult, Classifier, ClassifyError};
pub use engine::{run_crawl, CrawlEngine, CrawlReport};
pub use fetcher::{build_http_client, FetchError, FetchedPage, Fetcher, HttpFetcher};
pub use frontier::{Frontier, FrontierEntry};
pub use tables::{extract_tables, ParsedTable};
