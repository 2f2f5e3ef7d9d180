//! Resolved command options.

use std::path::PathBuf;

use crate::provider::DEFAULT_API_URL;

/// Default catalog location, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "metadata/python_downloads.json";

/// Default number of release pages to scan.
pub const DEFAULT_PAGES: u32 = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub output: PathBuf,
    pub pages: u32,
    pub token: Option<String>,
    pub api_url: String,
}

impl Config {
    /// Resolve options, falling back to defaults. An empty token counts as no token.
    pub fn new(
        output: Option<PathBuf>,
        pages: Option<u32>,
        token: Option<String>,
        api_url: Option<String>,
    ) -> Self {
        Self {
            output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            pages: pages.unwrap_or(DEFAULT_PAGES),
            token: token.filter(|t| !t.is_empty()),
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None, None, None)
    }
}
