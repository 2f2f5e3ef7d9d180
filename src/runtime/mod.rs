//! Runtime abstraction for system operations.
//!
//! The catalog writer only touches the filesystem through this trait, so the
//! driver can be tested against a mock without creating real files.

mod fs;

use anyhow::Result;
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    /// Recursively create a directory and all missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Create or truncate `path` and write `contents` to it in one call.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }
}
