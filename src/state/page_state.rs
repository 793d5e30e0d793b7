//! Outcome of a single frontier entry
//!
//! Every entry popped from the frontier ends in exactly one of these.
use std::fmt;

/// Represents what happened to one frontier entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageOutcome {
    // ===== Visited =====
    /// Page was fetched and classified as containing a table of interest
    Matched,

    /// Page was fetched and classified, no table of interest
    Processed,

    // ===== Degraded =====
    /// Fetch failed (network error, timeout, non-2xx status)
    FetchFailed,

    /// Page was fetched but classification failed; treated as no match, no links
    ClassifyFailed,

    // ===== Skipped =====
    /// Entry lies deeper than the configured maximum depth; never fetched
    DepthExceeded,
}

impl PageOutcome {
    /// Returns true if a request was sent for this entry
    pub fn was_fetched(&self) -> bool {
        !matches!(self, Self::DepthExceeded)
    }

    /// Returns true if the page was fully processed
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Matched | Self::Processed)
    }

    /// Returns true if this represents a per-page failure
    pub fn is_error(&self) -> bool {
        matches!(self, Self::FetchFailed | Self::ClassifyFailed)
    }

    /// Short label used in progress lines and statistics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Matched => "matched",
            Self::Processed => "processed",
            Self::FetchFailed => "fetch_failed",
            Self::ClassifyFailed => "classify_failed",
            Self::DepthExceeded => "depth_exceeded",
        }
    }

    /// Returns all possible outcomes
    pub fn all() -> [Self; 5] {
        [
            Self::Matched,
            Self::Processed,
            Self::FetchFailed,
            Self::ClassifyFailed,
            Self::DepthExceeded,
        ]
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
