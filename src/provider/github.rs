//! GitHub provider implementation.

use async_trait::async_trait;
use log::debug;

use crate::http::HttpClient;

use super::{FetchError, PER_PAGE, Provider, RELEASES_REPO, Release, ReleaseAsset};

/// GitHub API response types (internal).
///
/// Only the fields the catalog needs; everything else in the payload is ignored.
mod api {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct Release {
        pub tag_name: Option<String>,
        #[serde(default)]
        pub assets: Vec<Asset>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Asset {
        pub name: Option<String>,
        pub browser_download_url: Option<String>,
    }
}

/// GitHub provider for the python-build-standalone releases listing.
pub struct GitHubProvider {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubProvider {
    /// Create from an existing HttpClient.
    pub fn from_http_client(http_client: HttpClient, api_url: &str) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn releases_url(&self) -> String {
        format!("{}/repos/{}/releases", self.api_url, RELEASES_REPO)
    }
}

#[async_trait]
impl Provider for GitHubProvider {
    #[tracing::instrument(skip(self))]
    async fn get_releases_page(&self, page: u32) -> Result<Vec<Release>, FetchError> {
        let url = self.releases_url();
        debug!("Fetching releases page {} from {}...", page, url);

        let page_param = page.to_string();
        let per_page = PER_PAGE.to_string();

        let parsed: Vec<api::Release> = self
            .http_client
            .get_json_with_query(
                &url,
                &[("page", page_param.as_str()), ("per_page", per_page.as_str())],
            )
            .await
            .map_err(|cause| FetchError::new(page, cause))?;

        debug!("Page {} returned {} releases", page, parsed.len());
        Ok(parsed.into_iter().map(Release::from).collect())
    }
}

impl From<api::Release> for Release {
    fn from(r: api::Release) -> Self {
        Release {
            tag: r.tag_name,
            assets: r.assets.into_iter().map(ReleaseAsset::from).collect(),
        }
    }
}

impl From<api::Asset> for ReleaseAsset {
    fn from(a: api::Asset) -> Self {
        ReleaseAsset {
            name: a.name.unwrap_or_default(),
            download_url: a.browser_download_url,
        }
    }
}
