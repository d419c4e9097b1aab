use crate::direction::Direction;
use crate::shape::{LengthHint, SpriteShape};
use crate::sprite::{Heading, Sprite, SpriteId};

use super::Canvas;

/// Exclusive handle to one sprite on a canvas.
///
/// Position, heading, visibility, enabled state, size and shape setters run
/// the canvas change notification. Speed and interval setters do not.
pub struct SpriteMut<'a> {
    canvas: &'a mut Canvas,
    index: usize,
}

impl<'a> SpriteMut<'a> {
    pub(super) fn new(canvas: &'a mut Canvas, index: usize) -> Self {
        Self { canvas, index }
    }

    #[inline]
    pub fn get(&self) -> &Sprite {
        &self.canvas.sprites[self.index]
    }

    #[inline]
    pub fn id(&self) -> SpriteId {
        self.get().id()
    }

    fn sprite(&mut self) -> &mut Sprite {
        &mut self.canvas.sprites[self.index]
    }

    fn changed(&mut self) {
        let id = self.id();
        self.canvas.register_change(id);
    }

    // ── position ──────────────────────────────────────────────────────────

    pub fn set_x(&mut self, x: f64) {
        self.sprite().x = x;
        self.changed();
    }

    pub fn set_y(&mut self, y: f64) {
        self.sprite().y = y;
        self.changed();
    }

    /// Places the top-left corner at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) {
        let sprite = self.sprite();
        sprite.x = x;
        sprite.y = y;
        self.changed();
    }

    /// Pulls the sprite back inside the canvas. Does nothing when it already
    /// fits or the canvas is not laid out yet.
    pub fn move_into_bounds(&mut self) {
        if !self.canvas.is_ready() {
            return;
        }
        let viewport = self.canvas.viewport;
        if self.sprite().snap_into(viewport) {
            self.changed();
        }
    }

    // ── motion ────────────────────────────────────────────────────────────

    /// Sets the user heading in degrees.
    pub fn set_heading(&mut self, degrees: f64) {
        self.sprite().heading = Heading::from_degrees(degrees);
        self.changed();
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.sprite().speed = speed;
    }

    /// Changes the tick interval; an enabled timer restarts from now.
    pub fn set_interval(&mut self, interval_ms: u32) {
        let canvas = &mut *self.canvas;
        canvas.sprites[self.index]
            .timer
            .set_interval_ms(interval_ms, &mut canvas.looper);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        let canvas = &mut *self.canvas;
        canvas.sprites[self.index]
            .timer
            .set_enabled(enabled, &mut canvas.looper);
        self.changed();
    }

    /// Turns toward the center of `target`. Returns `false` if `target` is not
    /// on this canvas.
    pub fn point_towards(&mut self, target: SpriteId) -> bool {
        let Some(other) = self.canvas.sprite(target) else {
            return false;
        };
        let (target_pos, target_size) = (other.position(), other.size());
        let me = self.get();
        let dy = target_pos.y - me.y() + (target_size.y - me.height()) / 2.0;
        let dx = target_pos.x - me.x() + (target_size.x - me.width()) / 2.0;
        self.set_heading(-dy.atan2(dx).to_degrees());
        true
    }

    /// Reflects the heading off `edge` if the sprite is moving toward it,
    /// after first moving the sprite back into bounds.
    pub fn bounce(&mut self, edge: Direction) {
        self.move_into_bounds();
        if let Some(heading) = self.get().bounced_heading(edge) {
            self.set_heading(heading);
        }
    }

    // ── appearance ────────────────────────────────────────────────────────

    pub fn set_visible(&mut self, visible: bool) {
        self.sprite().visible = visible;
        self.changed();
    }

    pub fn set_width(&mut self, hint: LengthHint) {
        self.sprite().width_hint = hint;
        self.changed();
    }

    pub fn set_height(&mut self, hint: LengthHint) {
        self.sprite().height_hint = hint;
        self.changed();
    }

    /// Edits the concrete shape. Returns `None` without notifying when the
    /// sprite is not an `S`.
    pub fn update_shape<S: SpriteShape, R>(&mut self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        let shape = self.sprite().shape.as_any_mut().downcast_mut::<S>()?;
        let out = f(shape);
        self.changed();
        Some(out)
    }

    // ── queries ───────────────────────────────────────────────────────────

    pub fn colliding_with(&self, other: SpriteId) -> bool {
        self.canvas.colliding_with(self.id(), other)
    }

    /// Removes the sprite from its canvas.
    pub fn delete(self) {
        let id = self.id();
        self.canvas.delete_sprite(id);
    }
}
