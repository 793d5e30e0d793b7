use crate::config::{DomainMatch, FilterConfig};
use crate::url::matches_domain;
use crate::ConfigError;
use regex::Regex;
use url::Url;

/// Compiled link filter deciding which canonical URLs may be crawled
#[derive(Debug, Clone)]
pub struct UrlFilter {
    domain: String,
    mode: DomainMatch,
    excluded_suffixes: Vec<String>,
    exclude_paths: Option<Regex>,
}

impl UrlFilter {
    /// Builds a filter
    ///
    /// Extensions may be given with or without a leading dot and in any case.
    /// An empty exclusion pattern disables path exclusion. The pattern is
    /// matched as written against the lowercase canonical URL, so upper-case
    /// literals in it never match.
    pub fn new<S: AsRef<str>>(
        domain: &str,
        mode: DomainMatch,
        excluded_extensions: &[S],
        exclude_paths: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let exclude_paths = match exclude_paths.filter(|p| !p.is_empty()) {
            Some(pattern) => Some(Regex::new(pattern).map_err(|e| {
                ConfigError::InvalidPattern(format!("Invalid exclude-paths pattern: {}", e))
            })?),
            None => None,
        };

        let excluded_suffixes = excluded_extensions
            .iter()
            .map(|ext| format!(".{}", ext.as_ref().trim_start_matches('.').to_lowercase()))
            .collect();

        Ok(Self {
            domain: domain.trim().to_lowercase(),
            mode,
            excluded_suffixes,
            exclude_paths,
        })
    }

    /// Builds a filter from the `[filter]` configuration section
    pub fn from_config(config: &FilterConfig) -> Result<Self, ConfigError> {
        Self::new(
            &config.domain,
            config.match_mode,
            &config.excluded_extensions,
            config.exclude_paths.as_deref(),
        )
    }

    /// The lowercased domain this filter confines the crawl to
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Checks a resolved URL and its canonical form against every rule
    pub fn accepts(&self, url: &Url, canonical: &str) -> bool {
        if !self.in_domain(url, canonical) {
            return false;
        }

        if self.has_excluded_extension(canonical) {
            return false;
        }

        if let Some(pattern) = &self.exclude_paths {
            if pattern.is_match(canonical) {
                return false;
            }
        }

        true
    }

    fn in_domain(&self, url: &Url, canonical: &str) -> bool {
        match self.mode {
            DomainMatch::Substring => canonical.contains(&self.domain),
            DomainMatch::Host => url
                .host_str()
                .map(|host| matches_domain(&self.domain, &host.to_lowercase()))
                .unwrap_or(false),
        }
    }

    fn has_excluded_extension(&self, canonical: &str) -> bool {
        self.excluded_suffixes
            .iter()
            .any(|suffix| canonical.ends_with(suffix.as_str()))
    }
}
