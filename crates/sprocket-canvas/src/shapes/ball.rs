use std::any::Any;

use sprocket_engine::coords::{Rect, Vec2};
use sprocket_engine::paint::Color;
use sprocket_engine::scene::DrawList;

use crate::shape::{LengthHint, SpriteShape};

pub const DEFAULT_RADIUS: f64 = 5.0;

/// Round sprite.
///
/// Its size is always the diameter; width/height hints are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    radius: f64,
    paint_color: Color,
}

impl Ball {
    pub fn new(radius: f64) -> Self {
        Self {
            radius: radius.max(0.0),
            paint_color: Color::BLACK,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.paint_color = color;
        self
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(0.0);
    }

    #[inline]
    pub fn paint_color(&self) -> Color {
        self.paint_color
    }

    pub fn set_paint_color(&mut self, color: Color) {
        self.paint_color = color;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS)
    }
}

impl SpriteShape for Ball {
    fn natural_size(&self) -> Vec2 {
        Vec2::new(2.0 * self.radius, 2.0 * self.radius)
    }

    fn resolve_size(&self, _width: LengthHint, _height: LengthHint) -> Vec2 {
        self.natural_size()
    }

    fn contains_point(&self, bounds: Rect, p: Vec2) -> bool {
        let r = bounds.size.x.min(bounds.size.y) / 2.0;
        (p - bounds.center()).length_squared() <= r * r
    }

    fn paint(&self, list: &mut DrawList, bounds: Rect, _heading: f64) {
        list.push_circle(bounds.center(), self.radius, self.paint_color);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
