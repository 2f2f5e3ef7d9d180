use log::trace;

use super::CatalogEntry;
use crate::provider::ReleaseAsset;

/// Filename prefix of the assets we catalog, compared case-insensitively.
pub const ASSET_PREFIX: &str = "cpython-";

const SEPARATOR: char = '-';

/// Map a release asset to a catalog entry, or `None` if it should be skipped.
///
/// Filenames are split on `-`:
///
/// ```text
/// cpython-3.11.4+20230826-x86_64-unknown-linux-gnu-pgo+lto-full.tar.zst
/// [0]     [1]             [2 ..................... -2]     [-1]
/// name    version         platform                         flavor
/// ```
///
/// `version` drops everything from the first `+`, `flavor` everything from the
/// first `.`. `shared` is a plain substring test on the whole filename.
pub fn normalize(asset: &ReleaseAsset) -> Option<CatalogEntry> {
    let name = asset.name.as_str();

    if !has_prefix(name) {
        return None;
    }

    let parts: Vec<&str> = name.split(SEPARATOR).collect();
    if parts.len() < 3 {
        return None;
    }

    let url = match asset.download_url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => {
            trace!("Skipping {}: no download URL", name);
            return None;
        }
    };

    let last = parts.len() - 1;
    let version = parts[1].split('+').next().unwrap_or_default();
    let flavor = parts[last].split('.').next().unwrap_or_default();
    let platform = parts[2..last].join("-");

    Some(CatalogEntry {
        name: parts[0].to_string(),
        version: version.to_string(),
        platform,
        flavor: flavor.to_string(),
        shared: name.contains("shared"),
        url: url.to_string(),
    })
}

fn has_prefix(name: &str) -> bool {
    name.get(..ASSET_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(ASSET_PREFIX))
}
