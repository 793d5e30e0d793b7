//! Output sink trait and error types
//!
//! The crawl engine reports matched URLs through a `MatchSink`: one event per
//! newly matched URL while crawling, and a single `finalize` call with the
//! complete list once the frontier is drained.

use thiserror::Error;

/// Errors that can occur during output operations
///
/// A failure here destroys the result of a whole run, so unlike per-page
/// errors it is propagated to the caller.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for match sinks
pub trait MatchSink {
    /// Records a URL the moment it is first judged a match
    ///
    /// # Arguments
    ///
    /// * `url` - The normalized URL of the matching page
    fn record_match(&mut self, url: &str) -> OutputResult<()>;

    /// Persists the final, duplicate-free match list in discovery order
    ///
    /// # Arguments
    ///
    /// * `matches` - Every matched URL of the run
    fn finalize(&mut self, matches: &[String]) -> OutputResult<()>;
}

/// Sink that keeps everything in memory
///
/// Useful for embedding the crawler as a library or when the caller handles
/// persistence itself.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    /// URLs in the order `record_match` saw them
    pub recorded: Vec<String>,

    /// The list handed to `finalize`, if it was called
    pub finalized: Option<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchSink for MemorySink {
    fn record_match(&mut self, url: &str) -> OutputResult<()> {
        self.recorded.push(url.to_string());
        Ok(())
    }

    fn finalize(&mut self, matches: &[String]) -> OutputResult<()> {
        self.finalized = Some(matches.to_vec());
        Ok(())
    }
}
