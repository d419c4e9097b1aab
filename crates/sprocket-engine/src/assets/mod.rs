//! Media loading.
//!
//! Sprites name their pictures by path; an [`AssetLoader`] resolves a path to
//! an [`ImageAsset`] describing the decoded image. Failures are reported as
//! [`AssetError`] and callers decide how to degrade.

mod error;
mod loader;

pub use error::AssetError;
pub use loader::{AssetLoader, FsAssetLoader, ImageAsset, MemoryAssetLoader};
