use super::Vec2;

/// Inclusive axis-aligned box: every coordinate in `[left, right] x [top, bottom]`
/// is inside.
///
/// Collision pruning and touch hit-testing both narrow two boxes down to their
/// overlap with [`intersect_destructively`](Self::intersect_destructively) and
/// then sample the integer-spaced points of what is left.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    #[inline]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    /// Box covering the pixels of a `width` x `height` area whose top-left
    /// pixel is `origin`, grown by `border` on every side.
    pub fn around(origin: Vec2, width: f64, height: f64, border: f64) -> Self {
        Self::new(
            origin.x - border,
            origin.y - border,
            origin.x + width - 1.0 + border,
            origin.y + height - 1.0 + border,
        )
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Shrinks `self` to its overlap with `other`.
    ///
    /// Returns `false` when the boxes do not overlap; `self` is left in an
    /// unspecified (inverted) state in that case.
    pub fn intersect_destructively(&mut self, other: &BoundingBox) -> bool {
        self.left = self.left.max(other.left);
        self.top = self.top.max(other.top);
        self.right = self.right.min(other.right);
        self.bottom = self.bottom.min(other.bottom);

        self.left <= self.right && self.top <= self.bottom
    }

    /// Unit-spaced sample points from the top-left corner to the bottom-right
    /// corner, inclusive, column by column.
    pub fn sample_points(&self) -> impl Iterator<Item = Vec2> + use<> {
        let (left, top, right, bottom) = (self.left, self.top, self.right, self.bottom);
        let columns = steps(left, right);
        let rows = steps(top, bottom);
        (0..columns).flat_map(move |i| {
            let x = left + i as f64;
            (0..rows).map(move |j| Vec2::new(x, top + j as f64))
        })
    }
}

/// Sample count along one axis. Unbounded or inverted extents have none.
fn steps(from: f64, to: f64) -> u64 {
    if !from.is_finite() || !to.is_finite() || to < from {
        return 0;
    }
    ((to - from).floor() as u64).saturating_add(1)
}
