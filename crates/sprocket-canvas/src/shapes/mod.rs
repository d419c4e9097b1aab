//! Concrete sprite variants.

mod ball;
mod image_sprite;

pub use ball::{Ball, DEFAULT_RADIUS};
pub use image_sprite::ImageSprite;
