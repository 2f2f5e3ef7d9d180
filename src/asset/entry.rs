use serde::{Deserialize, Serialize};

/// One downloadable CPython build in the catalog.
///
/// Field order is the key order of the serialized JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub version: String,
    pub platform: String,
    pub flavor: String,
    pub shared: bool,
    pub url: String,
}

/// Identity of an entry for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub version: String,
    pub platform: String,
    pub flavor: String,
}

impl CatalogEntry {
    pub fn key(&self) -> EntryKey {
        EntryKey {
            version: self.version.clone(),
            platform: self.platform.clone(),
            flavor: self.flavor.clone(),
        }
    }
}
