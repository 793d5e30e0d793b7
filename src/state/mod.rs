//! State module for tracking crawl progress
//!
//! - `PageOutcome`: what happened to each frontier entry (matched, processed,
//!   failed, skipped), fed into the run statistics

mod page_state;

pub use page_state::PageOutcome;
