//! Color model for sprites and canvas backgrounds.
//!
//! Generated application code hands colors around as packed `0xAARRGGBB`
//! integers; [`Color`] converts those into float channels for renderers.

mod color;

pub use color::Color;
