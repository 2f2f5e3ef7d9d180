//! Release provider abstraction.
//!
//! A provider hands back one page of releases at a time. Pagination policy
//! (how many pages, when to stop) belongs to the caller.

mod github;

use async_trait::async_trait;
use std::fmt;

use crate::http::RequestError;

pub use github::GitHubProvider;

/// Default GitHub API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Repository whose releases carry the standalone CPython builds.
pub const RELEASES_REPO: &str = "astral-sh/python-build-standalone";

/// Releases requested per page.
pub const PER_PAGE: u32 = 50;

/// A downloadable asset from a release.
#[derive(Debug, Clone)]
pub struct ReleaseAsset {
    pub name: String,
    pub download_url: Option<String>,
}

/// A release from the provider.
#[derive(Debug, Clone)]
pub struct Release {
    /// Version tag (e.g., "20230826"), logged while collecting entries
    pub tag: Option<String>,
    /// Downloadable assets
    pub assets: Vec<ReleaseAsset>,
}

/// A page that could not be fetched.
#[derive(Debug)]
pub struct FetchError {
    pub page: u32,
    pub cause: RequestError,
}

impl FetchError {
    pub fn new(page: u32, cause: RequestError) -> Self {
        Self { page, cause }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to fetch page {}: {}", self.page, self.cause)
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// Trait for release providers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Provider: Send + Sync {
    /// Fetch a single page of releases. Pages are numbered from 1.
    ///
    /// One request, no retries. An empty list means there is no more data.
    async fn get_releases_page(&self, page: u32) -> Result<Vec<Release>, FetchError>;
}
