/// Straight-alpha RGBA color with channels in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks an `0xAARRGGBB` integer.
    #[inline]
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| ((argb >> shift) & 0xff) as f32 / 255.0;
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
            a: channel(24),
        }
    }

    /// Packs back into `0xAARRGGBB`, rounding each channel to the nearest byte.
    #[inline]
    pub fn to_argb(self) -> u32 {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (byte(self.a) << 24) | (byte(self.r) << 16) | (byte(self.g) << 8) | byte(self.b)
    }

    /// Returns premultiplied `(r, g, b, a)` for compositing renderers.
    #[inline]
    pub fn premultiplied(self) -> (f32, f32, f32, f32) {
        let a = self.a.clamp(0.0, 1.0);
        (self.r.clamp(0.0, 1.0) * a, self.g.clamp(0.0, 1.0) * a, self.b.clamp(0.0, 1.0) * a, a)
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }
}
