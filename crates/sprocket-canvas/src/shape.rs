use std::any::Any;
use std::fmt;

use sprocket_engine::coords::{Rect, Vec2};
use sprocket_engine::scene::DrawList;

/// Requested extent of a sprite along one axis.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum LengthHint {
    /// Exactly this many pixels.
    Pixels(f64),
    /// The shape's intrinsic size.
    #[default]
    Automatic,
    /// Requested to fill the container. Sprites resolve this to their
    /// intrinsic size as well.
    FillParent,
}

impl LengthHint {
    /// Code generated applications use for "automatic".
    pub const AUTOMATIC_CODE: i32 = -1;
    /// Code generated applications use for "fill parent".
    pub const FILL_PARENT_CODE: i32 = -2;

    /// Decodes an interpreter length: `-1` automatic, `-2` fill parent, other
    /// negatives clamp to zero pixels.
    pub fn from_code(code: i32) -> LengthHint {
        match code {
            Self::AUTOMATIC_CODE => LengthHint::Automatic,
            Self::FILL_PARENT_CODE => LengthHint::FillParent,
            px => LengthHint::Pixels(f64::from(px.max(0))),
        }
    }

    #[inline]
    pub fn resolve(self, natural: f64) -> f64 {
        match self {
            LengthHint::Pixels(px) => px,
            LengthHint::Automatic | LengthHint::FillParent => natural,
        }
    }
}

/// What a concrete sprite variant contributes to the motion and collision core.
///
/// The core only ever sees a sprite through this trait: its size, which
/// points it covers, and how it paints itself. Both collision detection and
/// touch hit-testing are decided by [`contains_point`](Self::contains_point),
/// so non-rectangular variants must override it.
pub trait SpriteShape: Any + fmt::Debug {
    /// Intrinsic size, used when a length hint is not explicit.
    fn natural_size(&self) -> Vec2;

    /// Resolves the sprite's width/height hints to a size.
    fn resolve_size(&self, width: LengthHint, height: LengthHint) -> Vec2 {
        let natural = self.natural_size();
        Vec2::new(width.resolve(natural.x), height.resolve(natural.y))
    }

    /// Whether `p` lies inside the shape placed at `bounds`.
    ///
    /// The default is the half-open rectangle test.
    fn contains_point(&self, bounds: Rect, p: Vec2) -> bool {
        bounds.contains(p)
    }

    /// Records draw commands for the shape placed at `bounds`. `heading` is the
    /// user-facing heading in degrees.
    fn paint(&self, list: &mut DrawList, bounds: Rect, heading: f64);

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
