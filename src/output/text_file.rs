//! Plain text match list
//!
//! One absolute URL per line, newline-joined, UTF-8, no header and no
//! trailing metadata.

use crate::output::traits::{MatchSink, OutputError, OutputResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the final match list to a text file
#[derive(Debug, Clone)]
pub struct TextFileSink {
    path: PathBuf,
}

impl TextFileSink {
    /// Creates a sink targeting `path`; nothing is written until `finalize`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this sink writes to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MatchSink for TextFileSink {
    fn record_match(&mut self, url: &str) -> OutputResult<()> {
        tracing::info!("Recorded URL of interest: {}", url);
        Ok(())
    }

    fn finalize(&mut self, matches: &[String]) -> OutputResult<()> {
        write_matches(&self.path, matches)?;
        tracing::info!(
            "Saved {} URL(s) of interest to {}",
            matches.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Writes `matches` to `path`, creating missing parent directories
pub fn write_matches(path: &Path, matches: &[String]) -> OutputResult<()> {
    let to_write_error = |source| OutputError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_write_error)?;
    }

    fs::write(path, matches.join("\n")).map_err(to_write_error)
}
