//! Page classification
//!
//! Decides whether a fetched page holds a table of interest and collects the
//! outbound links worth crawling. A page matches when:
//! - one of its static `<table>`s contains a keyword (case-insensitive
//!   substring of the table's text), or
//! - it carries the marker `<table>` of a client-side rendered table, which a
//!   static parse cannot see into.

use crate::config::Config;
use crate::crawler::tables::extract_tables;
use crate::url::{normalize_and_filter, UrlFilter};
use crate::ConfigError;
use scraper::{Html, Selector};
use std::collections::HashSet;
use thiserror::Error;
use url::Url;

/// Reasons a page could not be classified
///
/// The engine degrades these to "no match, no links" for the page.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("invalid page URL {url}: {message}")]
    InvalidPageUrl { url: String, message: String },

    #[error("invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

/// Result of classifying one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    /// A static table contained one of the keywords
    pub static_match: bool,

    /// The dynamic table marker element was present
    pub dynamic_marker: bool,

    /// Number of static tables found (with at least one cell)
    pub tables_found: usize,

    /// Distinct normalized outbound links, in document order
    pub links: Vec<String>,
}

impl ClassificationResult {
    /// A page with no match and no links
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when either heuristic fired
    pub fn is_match(&self) -> bool {
        self.static_match || self.dynamic_marker
    }
}

/// Fixed table heuristic plus link extraction
#[derive(Debug, Clone)]
pub struct Classifier {
    keywords: Vec<String>,
    dynamic_table_id: String,
    filter: UrlFilter,
}

impl Classifier {
    /// Creates a classifier; keywords are lowercased once here
    pub fn new<S: AsRef<str>>(keywords: &[S], dynamic_table_id: &str, filter: UrlFilter) -> Self {
        Self {
            keywords: keywords
                .iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            dynamic_table_id: dynamic_table_id.to_string(),
            filter,
        }
    }

    /// Builds the classifier from the `[classifier]` and `[filter]` sections
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let filter = UrlFilter::from_config(&config.filter)?;
        Ok(Self::new(
            &config.classifier.keywords,
            &config.classifier.dynamic_table_id,
            filter,
        ))
    }

    /// The link filter used for outbound links
    pub fn filter(&self) -> &UrlFilter {
        &self.filter
    }

    /// Classifies a page
    ///
    /// # Arguments
    ///
    /// * `page_url` - URL the page was requested from; base for relative links
    /// * `html` - The page body
    ///
    /// # Example
    ///
    /// ```
    /// use table_scout::config::DomainMatch;
    /// use table_scout::crawler::Classifier;
    /// use table_scout::url::UrlFilter;
    ///
    /// let filter = UrlFilter::new("example.com", DomainMatch::Substring, &["pdf"], Some("news")).unwrap();
    /// let classifier = Classifier::new(&["standings"], "ponchoTable", filter);
    ///
    /// let html = r#"<table><tr><td>Driver Standings</td></tr></table>
    ///               <a href="/teams">Teams</a><a href="/news/1">News</a>"#;
    /// let result = classifier.classify("http://example.com/", html).unwrap();
    ///
    /// assert!(result.is_match());
    /// assert_eq!(result.links, vec!["http://example.com/teams".to_string()]);
    /// ```
    pub fn classify(&self, page_url: &str, html: &str) -> Result<ClassificationResult, ClassifyError> {
        let base = Url::parse(page_url).map_err(|e| ClassifyError::InvalidPageUrl {
            url: page_url.to_string(),
            message: e.to_string(),
        })?;

        let marker_selector = self.marker_selector()?;
        let anchor_selector = parse_selector("a[href]")?;

        let document = Html::parse_document(html);

        // Static tables
        let tables = extract_tables(&document);
        tracing::debug!("{} static table(s) found on {}", tables.len(), page_url);

        let static_match = match tables
            .iter()
            .position(|table| table.contains_any(&self.keywords))
        {
            Some(index) => {
                tracing::debug!("Static table {} on {} matches the keywords", index + 1, page_url);
                true
            }
            None => false,
        };

        // Dynamic table marker
        let dynamic_marker = document.select(&marker_selector).next().is_some();
        if dynamic_marker {
            tracing::debug!(
                "Dynamic table '{}' detected on {}",
                self.dynamic_table_id,
                page_url
            );
        }

        // Outbound links
        let mut seen = HashSet::new();
        let links: Vec<String> = document
            .select(&anchor_selector)
            .filter_map(|anchor| anchor.value().attr("href"))
            .filter_map(|href| normalize_and_filter(&base, href, &self.filter))
            .filter(|link| seen.insert(link.clone()))
            .collect();
        tracing::debug!("{} valid internal link(s) found on {}", links.len(), page_url);

        Ok(ClassificationResult {
            static_match,
            dynamic_marker,
            tables_found: tables.len(),
            links,
        })
    }

    fn marker_selector(&self) -> Result<Selector, ClassifyError> {
        parse_selector(&format!("table[id=\"{}\"]", self.dynamic_table_id))
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ClassifyError> {
    Selector::parse(selector).map_err(|e| ClassifyError::Selector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}
