//! In-memory catalog: deduplication, ordering and persistence.

use anyhow::{Context, Result};
use log::debug;
use std::collections::HashSet;
use std::path::Path;

use crate::asset::{CatalogEntry, EntryKey};
use crate::runtime::Runtime;

/// Accumulates entries across pages; the first entry seen for a key wins.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    seen: HashSet<EntryKey>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry unless its `(version, platform, flavor)` is already present.
    /// Returns whether the entry was added.
    pub fn insert(&mut self, entry: CatalogEntry) -> bool {
        if !self.seen.insert(entry.key()) {
            debug!(
                "Duplicate {} {} {}, keeping first URL",
                entry.version, entry.platform, entry.flavor
            );
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Order by `(version, platform)` as plain strings, so "1.10.0" < "1.2.0".
    /// Stable: entries differing only in flavor keep their insertion order.
    pub fn sort(&mut self) {
        self.entries
            .sort_by(|a, b| (&a.version, &a.platform).cmp(&(&b.version, &b.platform)));
    }

    /// JSON array with 2-space indentation.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.entries).context("Failed to serialize catalog")
    }

    /// Write the catalog to `path`, creating its parent directory first.
    /// Any existing file is overwritten.
    #[tracing::instrument(skip(self, runtime))]
    pub fn write_to<R: Runtime>(&self, runtime: &R, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            runtime.create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        runtime
            .write(path, json.as_bytes())
            .with_context(|| format!("Failed to write catalog to {}", path.display()))?;

        debug!("Wrote {} bytes to {}", json.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{MockRuntime, RealRuntime};
    use mockall::predicate::eq;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn entry(version: &str, platform: &str, flavor: &str, url: &str) -> CatalogEntry {
        CatalogEntry {
            name: "cpython".into(),
            version: version.into(),
            platform: platform.into(),
            flavor: flavor.into(),
            shared: false,
            url: url.into(),
        }
    }

    #[test]
    fn test_insert_first_seen_wins() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert(entry("3.11.4", "x86_64-linux", "full", "first")));
        assert!(!catalog.insert(entry("3.11.4", "x86_64-linux", "full", "second")));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].url, "first");
    }

    #[test]
    fn test_is_empty_tracks_inserts() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());

        catalog.insert(entry("3.11.4", "x86_64-linux", "full", "a"));
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_insert_different_flavor_is_distinct() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert(entry("3.11.4", "x86_64-linux", "full", "a")));
        assert!(catalog.insert(entry("3.11.4", "x86_64-linux", "install_only", "b")));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_sort_is_lexicographic() {
        let mut catalog = Catalog::new();
        catalog.insert(entry("1.2.0", "linux", "full", "a"));
        catalog.insert(entry("1.10.0", "linux", "full", "b"));
        catalog.sort();

        let versions: Vec<&str> = catalog.entries().iter().map(|e| e.version.as_str()).collect();
        assert_eq!(versions, vec!["1.10.0", "1.2.0"]);
    }

    #[test]
    fn test_sort_by_version_then_platform() {
        let mut catalog = Catalog::new();
        catalog.insert(entry("3.12.1", "x86_64-linux", "full", "a"));
        catalog.insert(entry("3.11.4", "x86_64-linux", "full", "b"));
        catalog.insert(entry("3.12.1", "aarch64-darwin", "full", "c"));
        catalog.sort();

        let urls: Vec<&str> = catalog.entries().iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_keeps_flavor_groups_in_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.insert(entry("3.12.1", "linux", "install_only", "a"));
        catalog.insert(entry("3.11.4", "linux", "full", "b"));
        catalog.insert(entry("3.12.1", "linux", "full", "c"));
        catalog.sort();

        let urls: Vec<&str> = catalog.entries().iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(Catalog::new().to_json().unwrap(), "[]");
    }

    #[test]
    fn test_to_json_two_space_indent() {
        let mut catalog = Catalog::new();
        catalog.insert(entry("3.11.4", "x86_64-linux", "full", "u"));

        let expected = r#"[
  {
    "name": "cpython",
    "version": "3.11.4",
    "platform": "x86_64-linux",
    "flavor": "full",
    "shared": false,
    "url": "u"
  }
]"#;
        assert_eq!(catalog.to_json().unwrap(), expected);
    }

    #[test]
    fn test_write_to_creates_parent_dir() {
        let mut runtime = MockRuntime::new();
        let path = PathBuf::from("metadata/python_downloads.json");

        runtime
            .expect_create_dir_all()
            .with(eq(PathBuf::from("metadata")))
            .times(1)
            .returning(|_| Ok(()));
        runtime
            .expect_write()
            .withf(|p, contents| p == Path::new("metadata/python_downloads.json") && contents == b"[]")
            .times(1)
            .returning(|_, _| Ok(()));

        Catalog::new().write_to(&runtime, &path).unwrap();
    }

    #[test]
    fn test_write_to_bare_file_name_skips_mkdir() {
        let mut runtime = MockRuntime::new();
        runtime.expect_create_dir_all().never();
        runtime.expect_write().times(1).returning(|_, _| Ok(()));

        Catalog::new()
            .write_to(&runtime, Path::new("catalog.json"))
            .unwrap();
    }

    #[test]
    fn test_write_to_propagates_mkdir_failure() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_create_dir_all()
            .returning(|_| Err(anyhow::anyhow!("permission denied")));
        runtime.expect_write().never();

        let result = Catalog::new().write_to(&runtime, Path::new("/root/out/catalog.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_write_to_propagates_write_failure() {
        let mut runtime = MockRuntime::new();
        runtime.expect_create_dir_all().returning(|_| Ok(()));
        runtime
            .expect_write()
            .returning(|_, _| Err(anyhow::anyhow!("disk full")));

        let err = Catalog::new()
            .write_to(&runtime, Path::new("out/catalog.json"))
            .unwrap_err();
        assert!(err.to_string().contains("out/catalog.json"));
    }

    #[test]
    fn test_write_to_real_filesystem() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/catalog.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "stale contents that are longer than the new ones").unwrap();

        let mut catalog = Catalog::new();
        catalog.insert(entry("3.11.4", "x86_64-linux", "full", "u"));
        catalog.write_to(&RealRuntime, &path).unwrap();

        let written: Vec<CatalogEntry> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, catalog.entries());
    }
}
