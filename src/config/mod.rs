//! Configuration module for Table-Scout
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use table_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    ClassifierConfig, Config, CrawlerConfig, DomainMatch, FilterConfig, OutputConfig,
    UserAgentConfig, DEFAULT_DYNAMIC_TABLE_ID, DEFAULT_EXCLUDE_PATHS, DEFAULT_MATCHES_PATH,
    DEFAULT_MAX_DEPTH, DEFAULT_POLITENESS_DELAY_MS, DEFAULT_REQUEST_TIMEOUT_SECS,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
