pub mod circle;
pub mod image;
pub mod line;
pub mod rect;
pub mod text;
