//! Application layer - use cases that coordinate the provider, the asset
//! normalizer and the catalog.

mod build;

pub use build::{BuildOptions, BuildUseCase};
