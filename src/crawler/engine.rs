//! Crawl engine - main crawl orchestration logic
//!
//! This module contains the breadth-first crawl loop that coordinates:
//! - Seeding and draining the frontier
//! - Enforcing the depth limit when an entry is dequeued
//! - Fetching, classifying, and recording matches
//! - Enqueuing newly discovered links one level deeper
//! - The politeness delay between requests
//! - Handing the final match list to the sink

use crate::config::Config;
use crate::crawler::classifier::{ClassificationResult, Classifier};
use crate::crawler::fetcher::{Fetcher, HttpFetcher};
use crate::crawler::frontier::{Frontier, FrontierEntry};
use crate::output::{CrawlStatistics, MatchSink};
use crate::state::PageOutcome;
use crate::url::canonicalize_str;
use crate::ScoutError;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Distinct matched URLs in discovery order
    pub matches: Vec<String>,

    /// Counters for the run
    pub stats: CrawlStatistics,
}

/// Breadth-first crawl engine
///
/// Owns the frontier, the visited set, and the match list for exactly one
/// run. Configuration is immutable and may be shared between engines.
pub struct CrawlEngine<F: Fetcher> {
    config: Arc<Config>,
    fetcher: F,
    classifier: Classifier,
    frontier: Frontier,
    matches: Vec<String>,
    stats: CrawlStatistics,
}

impl<F: Fetcher> CrawlEngine<F> {
    /// Creates an engine for one run
    ///
    /// Seeds are fetched exactly as configured. Their canonical form is
    /// marked visited, so a later link back to a seed never re-enters the
    /// frontier.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlEngine)` - Ready to run
    /// * `Err(ScoutError)` - A seed is not a usable URL or the filter pattern is invalid
    pub fn new(config: Config, fetcher: F) -> Result<Self, ScoutError> {
        Self::with_shared_config(Arc::new(config), fetcher)
    }

    /// Creates an engine from a configuration shared with other engines
    pub fn with_shared_config(config: Arc<Config>, fetcher: F) -> Result<Self, ScoutError> {
        let classifier = Classifier::from_config(&config)?;

        let mut frontier = Frontier::new();
        for seed in &config.crawler.seeds {
            let canonical = canonicalize_str(seed)?;
            if !frontier.add_seed(seed.clone(), canonical) {
                tracing::debug!("Seed {} duplicates an earlier seed, skipping", seed);
            }
        }

        let mut stats = CrawlStatistics::new();
        stats.urls_enqueued = frontier.seen_count() as u64;

        Ok(Self {
            config,
            fetcher,
            classifier,
            frontier,
            matches: Vec::new(),
            stats,
        })
    }

    /// Number of entries still waiting in the frontier
    pub fn frontier_size(&self) -> usize {
        self.frontier.len()
    }

    /// Runs the crawl until the frontier is empty
    ///
    /// Per-page failures are logged and never stop the run. The only error
    /// returned after startup is a failure of the sink to persist the
    /// final match list.
    pub async fn run(mut self, sink: &mut dyn MatchSink) -> Result<CrawlReport, ScoutError> {
        let max_depth = self.config.crawler.max_depth;
        let delay = Duration::from_millis(self.config.crawler.politeness_delay_ms);

        tracing::info!(
            "Starting crawl: {} seed(s), domain '{}', max depth {}, delay {:?}",
            self.frontier.len(),
            self.classifier.filter().domain(),
            max_depth,
            delay
        );

        let start_time = Instant::now();
        let mut pages_visited: u64 = 0;

        while let Some(entry) = self.frontier.pop() {
            if entry.depth > max_depth {
                tracing::debug!(
                    "Depth {} > max {}, skipping {}",
                    entry.depth,
                    max_depth,
                    entry.url
                );
                self.stats.record(PageOutcome::DepthExceeded);
                continue;
            }

            tracing::info!("Visiting {} (depth {})", entry.url, entry.depth);

            let outcome = self.visit(&entry, sink).await;
            self.stats.record(outcome);
            pages_visited += 1;

            // Progress reporting every 10 pages
            if pages_visited % 10 == 0 {
                let rate = pages_visited as f64 / start_time.elapsed().as_secs_f64();
                tracing::info!(
                    "Progress: {} pages visited, {} in frontier, {} matches, {:.2} pages/sec",
                    pages_visited,
                    self.frontier.len(),
                    self.matches.len(),
                    rate
                );
            }

            tokio::time::sleep(delay).await;
        }

        self.stats.matches = self.matches.len() as u64;
        sink.finalize(&self.matches)?;
        self.stats.finish();

        tracing::info!(
            "Crawl completed: {} page(s) with tables of interest, {} pages visited in {:?}",
            self.matches.len(),
            pages_visited,
            start_time.elapsed()
        );

        Ok(CrawlReport {
            matches: self.matches,
            stats: self.stats,
        })
    }

    /// Fetches and classifies one entry, recording matches and new links
    async fn visit(&mut self, entry: &FrontierEntry, sink: &mut dyn MatchSink) -> PageOutcome {
        let page = match self.fetcher.fetch(&entry.url).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Network or HTTP error for {}: {}", entry.url, e);
                return PageOutcome::FetchFailed;
            }
        };

        if page.final_url != entry.url {
            tracing::debug!("{} redirected to {}", entry.url, page.final_url);
        }

        let (result, mut outcome) = match self.classifier.classify(&entry.url, &page.body) {
            Ok(result) => (result, PageOutcome::Processed),
            Err(e) => {
                tracing::warn!("Failed to classify {}: {}", entry.url, e);
                (ClassificationResult::empty(), PageOutcome::ClassifyFailed)
            }
        };

        if result.is_match() {
            outcome = PageOutcome::Matched;
            self.record_match(&entry.url, sink);
        }

        self.enqueue_links(result.links, entry.depth + 1);

        outcome
    }

    fn record_match(&mut self, url: &str, sink: &mut dyn MatchSink) {
        if self.matches.iter().any(|m| m == url) {
            return;
        }

        self.matches.push(url.to_string());
        if let Err(e) = sink.record_match(url) {
            tracing::warn!("Sink rejected match event for {}: {}", url, e);
        }
    }

    fn enqueue_links(&mut self, links: Vec<String>, depth: u32) {
        let mut added = 0;
        for link in links {
            if self.frontier.enqueue(link, depth) {
                added += 1;
            }
        }

        if added > 0 {
            tracing::debug!("Enqueued {} new link(s) at depth {}", added, depth);
        }
        self.stats.urls_enqueued += added;
    }
}

/// Runs a complete crawl over HTTP
///
/// This function orchestrates the entire crawl process:
///
/// 1. Build the HTTP client from the configuration
/// 2. Seed the frontier, marking each seed's canonical form visited
/// 3. Drain the frontier breadth-first
/// 4. Persist the match list through `sink`
///
/// # Example
///
/// ```no_run
/// use table_scout::config::load_config;
/// use table_scout::crawler::run_crawl;
/// use table_scout::output::TextFileSink;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("config.toml"))?;
/// let mut sink = TextFileSink::new(&config.output.matches_path);
/// let report = run_crawl(config, &mut sink).await?;
/// println!("{} matches", report.matches.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config, sink: &mut dyn MatchSink) -> Result<CrawlReport, ScoutError> {
    let fetcher = HttpFetcher::from_config(&config)?;
    CrawlEngine::new(config, fetcher)?.run(sink).await
}
