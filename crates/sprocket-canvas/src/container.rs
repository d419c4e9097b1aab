use crate::canvas::Canvas;

/// Anything a component can be created inside.
///
/// Sprites only accept a container that is a canvas; every other container
/// makes [`SpriteBuilder::attach`](crate::sprite::SpriteBuilder::attach)
/// fail with [`SpriteError::NotACanvas`](crate::error::SpriteError::NotACanvas).
pub trait ComponentContainer {
    /// Short name used in diagnostics.
    fn describe(&self) -> String;

    fn as_canvas_mut(&mut self) -> Option<&mut Canvas> {
        None
    }
}

impl ComponentContainer for Canvas {
    fn describe(&self) -> String {
        format!("Canvas({}x{})", self.width(), self.height())
    }

    fn as_canvas_mut(&mut self) -> Option<&mut Canvas> {
        Some(self)
    }
}
