//! Build use case - paginates releases into a catalog file.
//!
//! This use case coordinates:
//! - Fetching release pages one after another
//! - Normalizing every asset and deduplicating the results
//! - Sorting and writing the catalog

use std::path::PathBuf;

use anyhow::Result;
use log::{debug, info};

use crate::asset::normalize;
use crate::catalog::Catalog;
use crate::provider::{Provider, Release};
use crate::runtime::Runtime;

/// Options for the build use case
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Maximum number of pages to request, starting at page 1
    pub pages: u32,
    /// Destination file, overwritten on every run
    pub output: PathBuf,
}

/// Build use case - fetch, normalize, dedupe, sort, write
pub struct BuildUseCase<'a, R: Runtime, P: Provider> {
    runtime: &'a R,
    provider: &'a P,
}

impl<'a, R: Runtime, P: Provider> BuildUseCase<'a, R, P> {
    pub fn new(runtime: &'a R, provider: &'a P) -> Self {
        Self { runtime, provider }
    }

    /// Run the whole pipeline and return the number of entries written.
    ///
    /// A page that fails to download ends pagination but not the run: the
    /// catalog is still written with whatever earlier pages produced. Only
    /// failures to write the output are returned as errors.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self, options: &BuildOptions) -> Result<usize> {
        let mut catalog = Catalog::new();

        for page in 1..=options.pages {
            let releases = match self.provider.get_releases_page(page).await {
                Ok(releases) => releases,
                Err(e) => {
                    eprintln!("{}", e);
                    break;
                }
            };

            if releases.is_empty() {
                debug!("Page {} is empty, no more releases", page);
                break;
            }

            let added = collect(&mut catalog, &releases);
            info!(
                "Page {}: {} releases, {} new entries",
                page,
                releases.len(),
                added
            );
        }

        if catalog.is_empty() {
            info!("No entries collected, writing an empty catalog");
        }

        catalog.sort();
        catalog.write_to(self.runtime, &options.output)?;

        Ok(catalog.len())
    }
}

/// Normalize every asset of `releases` into `catalog`; returns how many were new.
fn collect(catalog: &mut Catalog, releases: &[Release]) -> usize {
    releases
        .iter()
        .map(|release| {
            let added = release
                .assets
                .iter()
                .filter_map(normalize)
                .map(|entry| catalog.insert(entry))
                .filter(|added| *added)
                .count();
            debug!(
                "Release {}: {} assets, {} new entries",
                release_label(release),
                release.assets.len(),
                added
            );
            added
        })
        .sum()
}

fn release_label(release: &Release) -> &str {
    release.tag.as_deref().unwrap_or("<untagged>")
}
