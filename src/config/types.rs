use serde::Deserialize;

/// Default crawl depth below the seeds
pub const DEFAULT_MAX_DEPTH: u32 = 3;

/// Default pause between two consecutive fetches (milliseconds)
pub const DEFAULT_POLITENESS_DELAY_MS: u64 = 1000;

/// Default per-request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default path exclusion pattern
pub const DEFAULT_EXCLUDE_PATHS: &str =
    "(news|stories|contact|terms|privacy|faq|help|search|media|sponsors|partners)";

/// Default element id marking a client-side rendered table
pub const DEFAULT_DYNAMIC_TABLE_ID: &str = "ponchoTable";

/// Default location of the matched-URL list
pub const DEFAULT_MATCHES_PATH: &str = "urls_with_tables.txt";

/// Main configuration structure for Table-Scout
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    pub filter: FilterConfig,
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// URLs the breadth-first traversal starts from (depth 0)
    pub seeds: Vec<String>,

    /// Maximum depth to crawl from seed URLs
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: u32,

    /// Pause after every fetch attempt (milliseconds)
    #[serde(rename = "politeness-delay-ms", default = "default_politeness_delay_ms")]
    pub politeness_delay_ms: u64,

    /// Upper bound for a single request (seconds)
    #[serde(rename = "request-timeout-secs", default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url", default)]
    pub contact_url: Option<String>,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email", default)]
    pub contact_email: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
            contact_email: None,
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    ///
    /// `Name/Version (+ContactURL; ContactEmail)` when contact details are
    /// configured, plain `Name/Version` otherwise.
    pub fn header_value(&self) -> String {
        let contact: Vec<&str> = [self.contact_url.as_deref(), self.contact_email.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        if contact.is_empty() {
            format!("{}/{}", self.crawler_name, self.crawler_version)
        } else {
            format!(
                "{}/{} (+{})",
                self.crawler_name,
                self.crawler_version,
                contact.join("; ")
            )
        }
    }
}

/// How the configured domain is compared against candidate URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DomainMatch {
    /// Domain string must occur anywhere in the canonical URL
    #[default]
    Substring,
    /// Host must be the domain itself or one of its subdomains
    Host,
}

/// Link filtering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Domain (or domain/path prefix) the crawl is confined to
    pub domain: String,

    #[serde(rename = "match-mode", default)]
    pub match_mode: DomainMatch,

    /// Regex matched against the whole canonical URL; a hit rejects the link
    #[serde(rename = "exclude-paths", default = "default_exclude_paths")]
    pub exclude_paths: Option<String>,

    /// File extensions (without dot) that are never followed
    #[serde(rename = "excluded-extensions", default = "default_excluded_extensions")]
    pub excluded_extensions: Vec<String>,
}

/// Page classification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Keywords searched (case-insensitively) in table text
    pub keywords: Vec<String>,

    /// Id of the `<table>` element that marks a client-side rendered table
    #[serde(rename = "dynamic-table-id", default = "default_dynamic_table_id")]
    pub dynamic_table_id: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the plain text file receiving the matched URLs
    #[serde(rename = "matches-path", default = "default_matches_path")]
    pub matches_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            matches_path: default_matches_path(),
        }
    }
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

fn default_politeness_delay_ms() -> u64 {
    DEFAULT_POLITENESS_DELAY_MS
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_exclude_paths() -> Option<String> {
    Some(DEFAULT_EXCLUDE_PATHS.to_string())
}

fn default_excluded_extensions() -> Vec<String> {
    ["pdf", "jpg", "png", "zip"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_dynamic_table_id() -> String {
    DEFAULT_DYNAMIC_TABLE_ID.to_string()
}

fn default_matches_path() -> String {
    DEFAULT_MATCHES_PATH.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_without_contact() {
        let ua = UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: None,
            contact_email: None,
        };
        assert_eq!(ua.header_value(), "TestBot/1.0");
    }

    #[test]
    fn test_user_agent_with_contact() {
        let ua = UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: Some("https://example.com/about".to_string()),
            contact_email: Some("admin@example.com".to_string()),
        };
        assert_eq!(
            ua.header_value(),
            "TestBot/1.0 (+https://example.com/about; admin@example.com)"
        );
    }

    #[test]
    fn test_default_extensions() {
        assert_eq!(default_excluded_extensions(), vec!["pdf", "jpg", "png", "zip"]);
    }
}
