//! The canvas' own drawing functions.
//!
//! Shapes and text drawn here land on a persistent layer between the
//! background and the sprites. The layer survives repaints and is wiped by
//! [`Canvas::clear`] or any background change.

use sprocket_engine::assets::AssetLoader;
use sprocket_engine::coords::{Rect, Vec2};
use sprocket_engine::paint::Color;
use sprocket_engine::scene::DrawList;
use sprocket_engine::scene::shapes::text::{TextAlign, TextCmd};

use super::Canvas;

pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
pub const DEFAULT_FONT_SIZE: f64 = 14.0;

/// Style shared by every drawing function.
#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    /// Transparent makes drawing invisible but still recorded.
    pub color: Color,
    pub line_width: f64,
    pub font_size: f64,
    pub text_align: TextAlign,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_width: DEFAULT_LINE_WIDTH,
            font_size: DEFAULT_FONT_SIZE,
            text_align: TextAlign::Left,
        }
    }
}

impl Canvas {
    // ── background ────────────────────────────────────────────────────────

    #[inline]
    pub fn background_color(&self) -> Color {
        self.background
    }

    /// Changes the background color and wipes the drawing layer.
    pub fn set_background_color(&mut self, color: Color) {
        self.background = color;
        self.clear();
    }

    /// Path of the background picture, empty when there is none.
    #[inline]
    pub fn background_image(&self) -> &str {
        &self.background_picture
    }

    /// Loads a background picture drawn instead of the background color and
    /// wipes the drawing layer. An empty path removes the picture; a picture
    /// that fails to load is logged and leaves the color showing.
    pub fn set_background_image(&mut self, path: &str, loader: &dyn AssetLoader) {
        self.background_picture = path.to_string();
        self.background_image = if path.is_empty() {
            None
        } else {
            match loader.load_image(path) {
                Ok(image) => Some(image),
                Err(err) => {
                    log::error!("canvas background: {err}");
                    None
                }
            }
        };
        self.clear();
    }

    // ── pen ───────────────────────────────────────────────────────────────

    #[inline]
    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn set_paint_color(&mut self, color: Color) {
        self.pen.color = color;
    }

    /// Negative widths are treated as zero.
    pub fn set_line_width(&mut self, width: f64) {
        self.pen.line_width = width.max(0.0);
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.pen.font_size = size.max(0.0);
    }

    pub fn set_text_alignment(&mut self, align: TextAlign) {
        self.pen.text_align = align;
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Everything drawn since the last clear, in drawing order.
    #[inline]
    pub fn drawing(&self) -> &DrawList {
        &self.drawing
    }

    /// Wipes the drawing layer. Sprites are unaffected.
    pub fn clear(&mut self) {
        self.drawing.clear();
        self.invalidate();
    }

    /// A square dot one line width across, centered on `(x, y)`.
    pub fn draw_point(&mut self, x: f64, y: f64) {
        let side = self.pen.line_width.max(1.0);
        let dot = Rect::new(x - side / 2.0, y - side / 2.0, side, side);
        self.drawing.push_rect(dot, self.pen.color);
        self.invalidate();
    }

    /// Filled circle.
    pub fn draw_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.drawing
            .push_circle(Vec2::new(x, y), radius.max(0.0), self.pen.color);
        self.invalidate();
    }

    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let (width, color) = (self.pen.line_width, self.pen.color);
        self.drawing
            .push_line(Vec2::new(x1, y1), Vec2::new(x2, y2), width, color);
        self.invalidate();
    }

    /// Text with its baseline anchored at `(x, y)`, placed per the pen's
    /// alignment.
    pub fn draw_text(&mut self, text: &str, x: f64, y: f64) {
        self.draw_text_at_angle(text, x, y, 0.0);
    }

    /// Like [`draw_text`](Self::draw_text), turned `angle` degrees
    /// counter-clockwise around the anchor.
    pub fn draw_text_at_angle(&mut self, text: &str, x: f64, y: f64, angle: f64) {
        self.drawing.push_text(TextCmd {
            text: text.to_string(),
            origin: Vec2::new(x, y),
            size: self.pen.font_size,
            align: self.pen.text_align,
            rotation: angle,
            color: self.pen.color,
        });
        self.invalidate();
    }
}
