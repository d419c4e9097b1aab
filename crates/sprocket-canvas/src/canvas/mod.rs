//! The sprite container: membership, the run loop, collision sweeps, edge
//! handling and gesture delivery.

mod drawing;
mod sprite_mut;

#[cfg(test)]
mod tests;

use std::time::Duration;

use sprocket_engine::assets::ImageAsset;
use sprocket_engine::coords::{Rect, Viewport};
use sprocket_engine::input::MotionEvent;
use sprocket_engine::looper::{Looper, TaskId};
use sprocket_engine::paint::Color;
use sprocket_engine::scene::DrawList;
use sprocket_engine::time::Timer;

use crate::collision::{self, CollisionRegistry};
use crate::direction::Direction;
use crate::event::{ComponentId, Event, EventDispatcher};
use crate::gesture::{Gesture, GestureConfig, MotionEventParser};
use crate::sprite::{Sprite, SpriteBuilder, SpriteId};
use crate::surface::{HeadlessSurface, Surface};

pub use drawing::{DEFAULT_FONT_SIZE, DEFAULT_LINE_WIDTH, Pen};
pub use sprite_mut::SpriteMut;

// ── CanvasConfig ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    pub gesture: GestureConfig,
    /// Pixels each bounding box is grown by before the collision scan.
    pub collision_margin: f64,
    /// Background color until changed at runtime.
    pub background: Color,
    /// Initial style of the drawing functions.
    pub pen: Pen,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            collision_margin: 1.0,
            background: Color::WHITE,
            pen: Pen::default(),
        }
    }
}

// ── Task ──────────────────────────────────────────────────────────────────

/// Unit of work on the canvas queue.
#[derive(Debug, Clone)]
pub(crate) enum Task {
    /// A sprite's motion timer went off.
    Alarm(SpriteId),
    /// Raw pointer input waiting for the gesture parser.
    Motion(MotionEvent),
    /// A user-visible event waiting for its handler.
    Deliver { target: ComponentId, event: Event },
}

// ── Canvas ────────────────────────────────────────────────────────────────

/// Owns sprites and runs everything that happens to them on one queue.
///
/// Timer ticks, pointer input and event delivery are all tasks on the same
/// [`Looper`], executed one at a time by [`advance`](Self::advance). Handlers
/// receive `&mut Canvas`; whatever they trigger is queued behind them.
pub struct Canvas {
    config: CanvasConfig,
    viewport: Viewport,
    sprites: Vec<Sprite>,
    next_sprite: u64,
    collisions: CollisionRegistry,
    parser: MotionEventParser,
    looper: Looper<Task>,
    surface: Box<dyn Surface>,
    needs_redraw: bool,
    background: Color,
    background_picture: String,
    background_image: Option<ImageAsset>,
    pen: Pen,
    drawing: DrawList,
}

impl Canvas {
    pub fn new(config: CanvasConfig) -> Self {
        Self::with_surface(config, HeadlessSurface::new())
    }

    pub fn with_surface(config: CanvasConfig, surface: impl Surface + 'static) -> Self {
        let parser = MotionEventParser::new(config.gesture);
        let (background, pen) = (config.background, config.pen.clone());
        Self {
            config,
            viewport: Viewport::default(),
            sprites: Vec::new(),
            next_sprite: 0,
            collisions: CollisionRegistry::new(),
            parser,
            looper: Looper::new(),
            surface: Box::new(surface),
            needs_redraw: true,
            background,
            background_picture: String::new(),
            background_image: None,
            pen,
            drawing: DrawList::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    // ── layout ────────────────────────────────────────────────────────────

    /// Host layout pass. Until a pass with a non-empty size the canvas is not
    /// ready: no edges are detected and nothing is moved into bounds.
    pub fn layout(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
        if self.viewport.is_valid() {
            log::debug!("canvas laid out at {width}x{height}");
        } else {
            log::debug!("canvas laid out with unusable size {width}x{height}");
        }
        self.invalidate();
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.viewport.is_valid()
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Laid-out width, 0 before the first layout.
    pub fn width(&self) -> f64 {
        if self.is_ready() { self.viewport.width } else { 0.0 }
    }

    /// Laid-out height, 0 before the first layout.
    pub fn height(&self) -> f64 {
        if self.is_ready() { self.viewport.height } else { 0.0 }
    }

    // ── membership ────────────────────────────────────────────────────────

    /// Adds a sprite, arms its timer and runs its first change notification.
    pub fn add_sprite(&mut self, builder: SpriteBuilder) -> SpriteId {
        let id = SpriteId(self.next_sprite);
        self.next_sprite += 1;

        let timer = Timer::with_settings(
            Task::Alarm(id),
            builder.interval_ms,
            builder.enabled,
            &mut self.looper,
        );
        self.sprites.push(Sprite::new(id, builder, timer));
        log::debug!("{id} added ({} sprites)", self.sprites.len());

        self.register_change(id);
        id
    }

    /// Deletes a sprite.
    ///
    /// Its timer is cancelled, it leaves any gesture in progress and its
    /// collision pairs are dropped without end events. Events already queued
    /// for it are discarded. Returns `false` for an unknown id.
    pub fn delete_sprite(&mut self, id: SpriteId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };

        let mut sprite = self.sprites.remove(index);
        sprite.timer.set_enabled(false, &mut self.looper);
        let dropped = self.collisions.forget(id);
        self.parser.forget(id);
        log::debug!("{id} deleted, {dropped} collision pair(s) dropped");

        self.invalidate();
        true
    }

    pub fn sprite(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.iter().find(|s| s.id() == id)
    }

    /// Mutable handle; every setter on it notifies the canvas.
    pub fn sprite_mut(&mut self, id: SpriteId) -> Option<SpriteMut<'_>> {
        let index = self.index_of(id)?;
        Some(SpriteMut::new(self, index))
    }

    /// Sprites in insertion order.
    pub fn sprites(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter()
    }

    pub fn sprite_ids(&self) -> Vec<SpriteId> {
        self.sprites.iter().map(Sprite::id).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Whether `a` and `b` are currently registered as colliding.
    pub fn colliding_with(&self, a: SpriteId, b: SpriteId) -> bool {
        self.collisions.contains(a, b)
    }

    /// Sprites currently colliding with `id`.
    pub fn collision_partners(&self, id: SpriteId) -> Vec<SpriteId> {
        let mut partners: Vec<SpriteId> = self.collisions.partners(id).collect();
        partners.sort();
        partners
    }

    // ── run loop ──────────────────────────────────────────────────────────

    /// Queue time.
    #[inline]
    pub fn now(&self) -> Duration {
        self.looper.now()
    }

    /// Queues raw pointer input for the gesture parser.
    pub fn post_motion(&mut self, event: MotionEvent) -> TaskId {
        self.looper.post(Task::Motion(event))
    }

    /// Runs every task due within the next `dt`, in order, then moves the
    /// queue clock to the end of the window. Returns how many tasks ran.
    pub fn advance(&mut self, dt: Duration, dispatcher: &mut dyn EventDispatcher) -> usize {
        let deadline = self.looper.now() + dt;
        let mut ran = 0;
        while let Some((id, task)) = self.looper.pop_due(deadline) {
            self.run_task(id, task, dispatcher);
            ran += 1;
        }
        self.looper.advance_to(deadline);
        ran
    }

    /// Runs what is due now without moving the clock.
    pub fn run_pending(&mut self, dispatcher: &mut dyn EventDispatcher) -> usize {
        self.advance(Duration::ZERO, dispatcher)
    }

    fn run_task(&mut self, id: TaskId, task: Task, dispatcher: &mut dyn EventDispatcher) {
        match task {
            Task::Alarm(sprite_id) => self.on_alarm(id, sprite_id),
            Task::Motion(event) => self.on_motion(&event),
            Task::Deliver { target, event } => {
                if let ComponentId::Sprite(sprite_id) = target {
                    if self.index_of(sprite_id).is_none() {
                        log::trace!("dropping {} for deleted {sprite_id}", event.name());
                        return;
                    }
                }
                dispatcher.dispatch(self, target, &event);
            }
        }
    }

    fn on_alarm(&mut self, task: TaskId, id: SpriteId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let sprite = &mut self.sprites[index];
        if !sprite.timer.fire(task, &mut self.looper) || sprite.speed == 0.0 {
            return;
        }
        sprite.advance();
        log::trace!("{id} moved to ({:.2}, {:.2})", sprite.x, sprite.y);
        self.register_change(id);
    }

    fn on_motion(&mut self, event: &MotionEvent) {
        if !self.is_ready() {
            log::debug!("motion before layout ignored: {event:?}");
            return;
        }
        let Some(gesture) = self.parser.parse(event, self.viewport, &self.sprites) else {
            return;
        };

        match gesture {
            Gesture::Tap { at, sprites } => {
                for &id in &sprites {
                    self.post_event(ComponentId::Sprite(id), Event::Touched { x: at.x, y: at.y });
                }
                let touched_sprite = !sprites.is_empty();
                self.post_event(
                    ComponentId::Canvas,
                    Event::CanvasTouched { x: at.x, y: at.y, touched_sprite },
                );
            }
            Gesture::Drag { start, prev, current, sprites } => {
                for &id in &sprites {
                    self.post_event(ComponentId::Sprite(id), Event::Dragged { start, prev, current });
                }
                let dragged_sprite = !sprites.is_empty();
                self.post_event(
                    ComponentId::Canvas,
                    Event::CanvasDragged { start, prev, current, dragged_sprite },
                );
            }
        }
    }

    fn post_event(&mut self, target: ComponentId, event: Event) {
        self.looper.post(Task::Deliver { target, event });
    }

    // ── change notification ───────────────────────────────────────────────

    /// Runs after anything observable about a sprite changed: requests a
    /// redraw, sweeps collisions, then checks the edges. A sprite found
    /// overhanging an edge is moved back, swept again, and gets one
    /// `EdgeReached`.
    pub(crate) fn register_change(&mut self, id: SpriteId) {
        self.invalidate();
        self.find_collisions(id);

        if let Some(edge) = self.hit_edge(id) {
            self.find_collisions(id);
            self.post_event(ComponentId::Sprite(id), Event::EdgeReached { edge });
        }
    }

    fn hit_edge(&mut self, id: SpriteId) -> Option<Direction> {
        if !self.is_ready() {
            return None;
        }
        let viewport = self.viewport;
        let index = self.index_of(id)?;
        let sprite = &mut self.sprites[index];
        let edge = sprite.edges_crossed(viewport)?;
        sprite.snap_into(viewport);
        Some(edge)
    }

    /// Compares `id` against every other member and raises collision
    /// start/end events for pairs whose state changed.
    fn find_collisions(&mut self, id: SpriteId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let margin = self.config.collision_margin;
        let moved = &self.sprites[index];

        let mut started = Vec::new();
        let mut ended = Vec::new();
        for other in &self.sprites {
            if other.id() == id {
                continue;
            }
            let eligible = moved.is_eligible() && other.is_eligible();
            if self.collisions.contains(id, other.id()) {
                if !eligible || !collision::colliding(moved, other, margin) {
                    ended.push(other.id());
                }
            } else if eligible && collision::colliding(moved, other, margin) {
                started.push(other.id());
            }
        }

        for other in ended {
            if self.collisions.unregister(id, other) {
                self.post_event(ComponentId::Sprite(id), Event::NoLongerCollidingWith { other });
                self.post_event(ComponentId::Sprite(other), Event::NoLongerCollidingWith { other: id });
            }
        }
        for other in started {
            if self.collisions.register(id, other) {
                self.post_event(ComponentId::Sprite(id), Event::CollidedWith { other });
                self.post_event(ComponentId::Sprite(other), Event::CollidedWith { other: id });
            }
        }
    }

    // ── painting ──────────────────────────────────────────────────────────

    fn invalidate(&mut self) {
        self.needs_redraw = true;
        self.surface.invalidate();
    }

    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Records, bottom to top: the background image or color, the drawing
    /// layer, then every visible sprite.
    pub fn paint(&mut self, list: &mut DrawList) {
        if self.is_ready() {
            let size = self.viewport.size();
            let full = Rect::new(0.0, 0.0, size.x, size.y);
            match &self.background_image {
                Some(image) => list.push_image(image.path.as_str(), full, 0.0),
                None => list.push_rect(full, self.background),
            }
        }
        for cmd in self.drawing.items() {
            list.push(cmd.clone());
        }
        for sprite in self.sprites.iter().filter(|s| s.visible()) {
            sprite.shape().paint(list, sprite.bounds(), sprite.heading());
        }
        self.needs_redraw = false;
    }

    fn index_of(&self, id: SpriteId) -> Option<usize> {
        self.sprites.iter().position(|s| s.id() == id)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}
