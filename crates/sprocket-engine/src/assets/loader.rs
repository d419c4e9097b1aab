use std::collections::HashMap;
use std::path::PathBuf;

use image::GenericImageView;

use super::AssetError;

/// A decoded image, as far as layout and rendering need to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

/// Resolves asset paths to images.
pub trait AssetLoader {
    fn load_image(&self, path: &str) -> Result<ImageAsset, AssetError>;
}

/// Loads images from a directory on disk.
///
/// Only the image header is read; pixel data stays with the host renderer.
#[derive(Debug, Clone)]
pub struct FsAssetLoader {
    root: PathBuf,
}

impl FsAssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetLoader for FsAssetLoader {
    fn load_image(&self, path: &str) -> Result<ImageAsset, AssetError> {
        if path.is_empty() {
            return Err(AssetError::EmptyPath);
        }
        let full = self.root.join(path);
        let (width, height) =
            image::image_dimensions(&full).map_err(|e| AssetError::from_image(path, e))?;
        log::debug!("loaded {path} ({width}x{height}) from {}", full.display());
        Ok(ImageAsset { path: path.to_string(), width, height })
    }
}

/// Serves images from encoded bytes registered up front (bundled assets).
#[derive(Debug, Default)]
pub struct MemoryAssetLoader {
    assets: HashMap<String, Vec<u8>>,
}

impl MemoryAssetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, encoded: Vec<u8>) {
        self.assets.insert(path.into(), encoded);
    }
}

impl AssetLoader for MemoryAssetLoader {
    fn load_image(&self, path: &str) -> Result<ImageAsset, AssetError> {
        if path.is_empty() {
            return Err(AssetError::EmptyPath);
        }
        let bytes = self.assets.get(path).ok_or_else(|| AssetError::Io {
            path: path.to_string(),
            message: "no such bundled asset".to_string(),
        })?;
        let img = image::load_from_memory(bytes).map_err(|e| AssetError::from_image(path, e))?;
        let (width, height) = img.dimensions();
        Ok(ImageAsset { path: path.to_string(), width, height })
    }
}

#[cfg(test)]
pub(crate) fn encode_png(width: u32, height: u32) -> Vec<u8> {
    let mut out = std::io::Cursor::new(Vec::new());
    image::RgbaImage::new(width, height)
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("png encoding");
    out.into_inner()
}
