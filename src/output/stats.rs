//! Run statistics
//!
//! Counters accumulated by the crawl engine while it drains the frontier,
//! plus a human-readable rendering for the end of a CLI run.

use crate::state::PageOutcome;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the frontier was drained (None while running)
    pub finished_at: Option<DateTime<Utc>>,

    /// Count of frontier entries by outcome
    pub pages_by_outcome: HashMap<PageOutcome, u64>,

    /// Number of URLs ever placed in the frontier (seeds included)
    pub urls_enqueued: u64,

    /// Number of distinct matched URLs
    pub matches: u64,
}

impl Default for CrawlStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl CrawlStatistics {
    /// Starts a new, empty statistics record stamped with the current time
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            pages_by_outcome: HashMap::new(),
            urls_enqueued: 0,
            matches: 0,
        }
    }

    /// Records the outcome of one frontier entry
    pub fn record(&mut self, outcome: PageOutcome) {
        *self.pages_by_outcome.entry(outcome).or_insert(0) += 1;
    }

    /// Number of entries that ended with the given outcome
    pub fn count(&self, outcome: PageOutcome) -> u64 {
        self.pages_by_outcome.get(&outcome).copied().unwrap_or(0)
    }

    /// Number of requests that were actually sent
    pub fn pages_fetched(&self) -> u64 {
        self.pages_by_outcome
            .iter()
            .filter(|(outcome, _)| outcome.was_fetched())
            .map(|(_, count)| count)
            .sum()
    }

    /// Number of pages that were fetched and fully processed
    pub fn pages_succeeded(&self) -> u64 {
        self.pages_by_outcome
            .iter()
            .filter(|(outcome, _)| outcome.is_success())
            .map(|(_, count)| count)
            .sum()
    }

    /// Number of per-page failures (fetch or classification)
    pub fn total_errors(&self) -> u64 {
        self.pages_by_outcome
            .iter()
            .filter(|(outcome, _)| outcome.is_error())
            .map(|(_, count)| count)
            .sum()
    }

    /// Marks the run as finished
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Wall-clock duration of the run, if finished
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Run:");
    println!("  Started: {}", stats.started_at.to_rfc3339());
    if let Some(finished) = stats.finished_at {
        println!("  Finished: {}", finished.to_rfc3339());
    }
    if let Some(duration) = stats.duration_seconds() {
        println!(
            "  Duration: {} seconds ({:.2} minutes)",
            duration,
            duration as f64 / 60.0
        );
    }
    println!();

    println!("Overview:");
    println!("  URLs enqueued: {}", stats.urls_enqueued);
    println!("  Pages fetched: {}", stats.pages_fetched());
    println!("  Pages with tables of interest: {}", stats.matches);
    println!();

    println!("Entries by Outcome:");
    for outcome in PageOutcome::all() {
        let count = stats.count(outcome);
        if count > 0 {
            println!("  {}: {}", outcome, count);
        }
    }
    println!("  Per-page errors: {}", stats.total_errors());
    println!();

    let fetched = stats.pages_fetched();
    let success = stats.pages_succeeded();
    let success_rate = if fetched > 0 {
        (success as f64 / fetched as f64) * 100.0
    } else {
        0.0
    };

    println!(
        "Success Rate: {:.1}% ({} / {} pages successfully processed)",
        success_rate, success, fetched
    );
}
