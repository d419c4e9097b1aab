use std::any::Any;

use sprocket_engine::assets::{AssetLoader, ImageAsset};
use sprocket_engine::coords::{Rect, Vec2};
use sprocket_engine::scene::DrawList;

use crate::shape::SpriteShape;

/// Sprite drawn from a picture asset.
///
/// Its intrinsic size is the picture's pixel size. A picture that fails to
/// load leaves the sprite with no image and a 0x0 intrinsic size.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSprite {
    picture: String,
    image: Option<ImageAsset>,
    rotates: bool,
}

impl ImageSprite {
    pub fn new() -> Self {
        Self {
            picture: String::new(),
            image: None,
            rotates: true,
        }
    }

    /// Convenience for building with a picture already resolved.
    pub fn with_picture(path: &str, loader: &dyn AssetLoader) -> Self {
        let mut sprite = Self::new();
        sprite.set_picture(path, loader);
        sprite
    }

    #[inline]
    pub fn picture(&self) -> &str {
        &self.picture
    }

    #[inline]
    pub fn image(&self) -> Option<&ImageAsset> {
        self.image.as_ref()
    }

    /// Resolves `path` through `loader`. An empty path clears the picture.
    pub fn set_picture(&mut self, path: &str, loader: &dyn AssetLoader) {
        self.picture = path.to_string();
        if path.is_empty() {
            self.image = None;
            return;
        }
        self.image = match loader.load_image(path) {
            Ok(image) => Some(image),
            Err(err) => {
                log::error!("ImageSprite: {err}");
                None
            }
        };
    }

    #[inline]
    pub fn rotates(&self) -> bool {
        self.rotates
    }

    /// Whether the picture turns with the sprite's heading.
    pub fn set_rotates(&mut self, rotates: bool) {
        self.rotates = rotates;
    }
}

impl Default for ImageSprite {
    fn default() -> Self {
        Self::new()
    }
}

impl SpriteShape for ImageSprite {
    fn natural_size(&self) -> Vec2 {
        self.image
            .as_ref()
            .map(|img| Vec2::new(f64::from(img.width), f64::from(img.height)))
            .unwrap_or_default()
    }

    fn paint(&self, list: &mut DrawList, bounds: Rect, heading: f64) {
        let Some(image) = &self.image else {
            return;
        };
        let rotation = if self.rotates { heading } else { 0.0 };
        list.push_image(image.path.as_str(), bounds, rotation);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
