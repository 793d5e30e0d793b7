//! Crawl frontier and visited set
//!
//! This module handles:
//! - The FIFO queue of (URL, depth) entries awaiting a visit
//! - The visited set of every URL ever enqueued
//!
//! A URL is marked visited at the moment it is enqueued, not when it is
//! processed, so a page linked from many places still enters the queue once.

use std::collections::{HashSet, VecDeque};

/// A URL queued for fetching with its distance from the seeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    /// Normalized URL to fetch
    pub url: String,

    /// Number of hops from a seed (seeds are depth 0)
    pub depth: u32,
}

/// Breadth-first frontier
///
/// Entries come out in insertion order. Nothing is ever removed from the
/// visited set during a run.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<FrontierEntry>,
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a seed at depth 0 exactly as configured
    ///
    /// `canonical` is what lands in the visited set, so a later link that
    /// normalizes to the same page is not enqueued again. Returns false when
    /// another seed with the same canonical form came first.
    pub fn add_seed(&mut self, url: String, canonical: String) -> bool {
        if !self.mark_seen(canonical) {
            return false;
        }

        self.queue.push_back(FrontierEntry { url, depth: 0 });
        true
    }

    /// Marks `url` as visited without queuing it
    ///
    /// Returns true if the URL was not seen before.
    pub fn mark_seen(&mut self, url: String) -> bool {
        self.visited.insert(url)
    }

    /// Enqueues `url` at `depth` unless it was ever enqueued before
    ///
    /// The visited check and insert happen together; returns true if the
    /// URL was new.
    pub fn enqueue(&mut self, url: String, depth: u32) -> bool {
        if !self.mark_seen(url.clone()) {
            return false;
        }

        self.queue.push_back(FrontierEntry { url, depth });
        true
    }

    /// Removes and returns the earliest-inserted entry
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }

    /// Returns the number of entries waiting in the queue
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of distinct URLs ever enqueued
    pub fn seen_count(&self) -> usize {
        self.visited.len()
    }
}
