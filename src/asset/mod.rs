//! Asset normalization module
//!
//! Turns raw release assets into catalog entries. Only standalone CPython
//! builds (`cpython-<version>-<platform...>-<flavor>.<ext>`) are kept; every
//! other asset is skipped without error.

mod entry;
mod normalize;

pub use entry::{CatalogEntry, EntryKey};
pub use normalize::{ASSET_PREFIX, normalize};
