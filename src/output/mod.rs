//! Output module for crawl results
//!
//! This module handles:
//! - The `MatchSink` interface the crawl engine reports matches through
//! - Writing the final match list as a plain text file
//! - Recording and printing run statistics

pub mod stats;
mod text_file;
mod traits;

pub use stats::{print_statistics, CrawlStatistics};
pub use text_file::{write_matches, TextFileSink};
pub use traits::{MatchSink, MemorySink, OutputError, OutputResult};
