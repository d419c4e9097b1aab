use std::fmt;

use sprocket_engine::coords::{BoundingBox, Rect, Vec2, Viewport};
use sprocket_engine::time::{DEFAULT_INTERVAL_MS, Timer};

use crate::canvas::{Canvas, Task};
use crate::container::ComponentContainer;
use crate::direction::Direction;
use crate::error::SpriteError;
use crate::shape::{LengthHint, SpriteShape};

// ── SpriteId ──────────────────────────────────────────────────────────────

/// Stable identity of a sprite within its canvas. Never reused.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SpriteId(pub(crate) u64);

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sprite#{}", self.0)
    }
}

// ── Heading ───────────────────────────────────────────────────────────────

/// Direction of motion.
///
/// The user angle counts degrees counter-clockwise from the positive x-axis.
/// The surface's y-axis points down, so the cached radians are of the negated
/// angle. All four values change together.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Heading {
    user: f64,
    radians: f64,
    cos: f64,
    sin: f64,
}

impl Heading {
    pub fn from_degrees(user: f64) -> Self {
        let radians = (-user).to_radians();
        Self {
            user,
            radians,
            cos: radians.cos(),
            sin: radians.sin(),
        }
    }

    #[inline]
    pub fn degrees(&self) -> f64 {
        self.user
    }

    /// Screen-space angle in radians.
    #[inline]
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// Displacement of one tick at `speed`.
    #[inline]
    pub fn step(&self, speed: f64) -> Vec2 {
        Vec2::new(speed * self.cos, speed * self.sin)
    }
}

impl Default for Heading {
    fn default() -> Self {
        Self::from_degrees(0.0)
    }
}

// ── Sprite ────────────────────────────────────────────────────────────────

/// A movable entity on a canvas.
///
/// Read access is plain; every mutation goes through
/// [`SpriteMut`](crate::canvas::SpriteMut) so the canvas can redraw, sweep
/// collisions and check edges.
#[derive(Debug)]
pub struct Sprite {
    id: SpriteId,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) speed: f64,
    pub(crate) heading: Heading,
    pub(crate) visible: bool,
    pub(crate) width_hint: LengthHint,
    pub(crate) height_hint: LengthHint,
    pub(crate) timer: Timer<Task>,
    pub(crate) shape: Box<dyn SpriteShape>,
}

impl Sprite {
    pub(crate) fn new(id: SpriteId, builder: SpriteBuilder, timer: Timer<Task>) -> Self {
        Self {
            id,
            x: builder.x,
            y: builder.y,
            speed: builder.speed,
            heading: Heading::from_degrees(builder.heading),
            visible: builder.visible,
            width_hint: builder.width,
            height_hint: builder.height,
            timer,
            shape: builder.shape,
        }
    }

    #[inline]
    pub fn id(&self) -> SpriteId {
        self.id
    }

    /// Left edge.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Top edge.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Pixels moved per timer tick.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// User heading in degrees.
    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading.degrees()
    }

    #[inline]
    pub fn heading_state(&self) -> Heading {
        self.heading
    }

    #[inline]
    pub fn interval_ms(&self) -> u32 {
        self.timer.interval_ms()
    }

    /// Whether the sprite moves and takes part in collisions and gestures.
    #[inline]
    pub fn enabled(&self) -> bool {
        self.timer.enabled()
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn width_hint(&self) -> LengthHint {
        self.width_hint
    }

    #[inline]
    pub fn height_hint(&self) -> LengthHint {
        self.height_hint
    }

    pub fn size(&self) -> Vec2 {
        self.shape.resolve_size(self.width_hint, self.height_hint)
    }

    pub fn width(&self) -> f64 {
        self.size().x
    }

    pub fn height(&self) -> f64 {
        self.size().y
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position(), self.size())
    }

    /// Inclusive pixel box of the sprite grown by `border` on every side.
    pub fn bounding_box(&self, border: f64) -> BoundingBox {
        let size = self.size();
        BoundingBox::around(self.position(), size.x, size.y, border)
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        self.shape.contains_point(self.bounds(), p)
    }

    /// Whether any sampled point of the overlap with `rect` lies inside the
    /// sprite. Used for finger hit-testing.
    pub fn intersects_box(&self, rect: &BoundingBox) -> bool {
        let mut overlap = self.bounding_box(0.0);
        if !overlap.intersect_destructively(rect) {
            return false;
        }
        overlap.sample_points().any(|p| self.contains_point(p))
    }

    /// Visible and enabled.
    #[inline]
    pub fn is_eligible(&self) -> bool {
        self.visible && self.enabled()
    }

    pub fn shape(&self) -> &dyn SpriteShape {
        self.shape.as_ref()
    }

    /// Downcasts the shape to a concrete variant.
    pub fn shape_as<S: SpriteShape>(&self) -> Option<&S> {
        self.shape.as_any().downcast_ref::<S>()
    }

    // ── motion ────────────────────────────────────────────────────────────

    pub(crate) fn advance(&mut self) {
        let step = self.heading.step(self.speed);
        self.x += step.x;
        self.y += step.y;
    }

    /// Which edges of `viewport` the sprite currently overhangs.
    pub fn edges_crossed(&self, viewport: Viewport) -> Option<Direction> {
        let size = self.size();
        let west = self.x < 0.0;
        let north = self.y < 0.0;
        let east = self.x + size.x > viewport.width;
        let south = self.y + size.y > viewport.height;
        Direction::from_edges(north, east, south, west)
    }

    /// Moves the sprite fully inside `viewport`. A sprite larger than the
    /// viewport on an axis is aligned to the near edge.
    ///
    /// Returns whether the position changed.
    pub(crate) fn snap_into(&mut self, viewport: Viewport) -> bool {
        let size = self.size();
        let mut moved = false;

        if size.x > viewport.width {
            if self.x != 0.0 {
                self.x = 0.0;
                moved = true;
            }
        } else if self.x < 0.0 {
            self.x = 0.0;
            moved = true;
        } else if self.x + size.x > viewport.width {
            self.x = viewport.width - size.x;
            moved = true;
        }

        if size.y > viewport.height {
            if self.y != 0.0 {
                self.y = 0.0;
                moved = true;
            }
        } else if self.y < 0.0 {
            self.y = 0.0;
            moved = true;
        } else if self.y + size.y > viewport.height {
            self.y = viewport.height - size.y;
            moved = true;
        }

        moved
    }

    /// Heading after bouncing off `edge`, or `None` when the sprite is not
    /// moving toward that edge.
    pub fn bounced_heading(&self, edge: Direction) -> Option<f64> {
        let a = self.heading.degrees().rem_euclid(360.0);
        let reflected = match edge {
            Direction::East if a < 90.0 || a > 270.0 => 180.0 - a,
            Direction::West if a > 90.0 && a < 270.0 => 180.0 - a,
            Direction::North if a > 0.0 && a < 180.0 => 360.0 - a,
            Direction::South if a > 180.0 => 360.0 - a,
            Direction::NorthEast if a > 0.0 && a < 90.0 => 180.0 + a,
            Direction::NorthWest if a > 90.0 && a < 180.0 => 180.0 + a,
            Direction::SouthWest if a > 180.0 && a < 270.0 => 180.0 + a,
            Direction::SouthEast if a > 270.0 => 180.0 + a,
            _ => return None,
        };
        Some(reflected)
    }
}

// ── SpriteBuilder ─────────────────────────────────────────────────────────

/// Initial properties of a sprite, applied before its first change
/// notification.
///
/// ```rust,ignore
/// let id = SpriteBuilder::new(Ball::new(8.0))
///     .position(10.0, 20.0)
///     .heading(45.0)
///     .speed(4.0)
///     .interval_ms(50)
///     .attach(&mut canvas)?;
/// ```
#[derive(Debug)]
pub struct SpriteBuilder {
    shape: Box<dyn SpriteShape>,
    x: f64,
    y: f64,
    heading: f64,
    speed: f64,
    pub(crate) interval_ms: u32,
    pub(crate) enabled: bool,
    visible: bool,
    width: LengthHint,
    height: LengthHint,
}

impl SpriteBuilder {
    pub fn new(shape: impl SpriteShape) -> Self {
        Self::from_boxed(Box::new(shape))
    }

    pub fn from_boxed(shape: Box<dyn SpriteShape>) -> Self {
        Self {
            shape,
            x: 0.0,
            y: 0.0,
            heading: 0.0,
            speed: 0.0,
            interval_ms: DEFAULT_INTERVAL_MS,
            enabled: true,
            visible: true,
            width: LengthHint::Automatic,
            height: LengthHint::Automatic,
        }
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn heading(mut self, degrees: f64) -> Self {
        self.heading = degrees;
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn interval_ms(mut self, interval_ms: u32) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn width(mut self, hint: LengthHint) -> Self {
        self.width = hint;
        self
    }

    pub fn height(mut self, hint: LengthHint) -> Self {
        self.height = hint;
        self
    }

    /// Attaches the sprite to `container`, which must be a canvas.
    pub fn attach(self, container: &mut dyn ComponentContainer) -> Result<SpriteId, SpriteError> {
        let description = container.describe();
        match container.as_canvas_mut() {
            Some(canvas) => Ok(canvas.add_sprite(self)),
            None => Err(SpriteError::NotACanvas { container: description }),
        }
    }

    /// Shorthand for [`Canvas::add_sprite`].
    pub fn build(self, canvas: &mut Canvas) -> SpriteId {
        canvas.add_sprite(self)
    }
}
