use super::Vec2;

/// Measured size of a drawing surface in logical pixels.
///
/// Hosts report this after their layout pass; until then a surface has no
/// viewport at all.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Clamps `p` to the last addressable pixel, `[0, w-1] x [0, h-1]`.
    ///
    /// Negative coordinates (a gesture that left the surface) become zero.
    pub fn clamp_point(self, p: Vec2) -> Vec2 {
        let max_x = (self.width - 1.0).max(0.0);
        let max_y = (self.height - 1.0).max(0.0);
        Vec2::new(p.x.clamp(0.0, max_x), p.y.clamp(0.0, max_y))
    }
}
