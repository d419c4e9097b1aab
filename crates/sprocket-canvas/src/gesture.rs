//! Touch versus drag disambiguation.

use sprocket_engine::coords::{BoundingBox, Vec2, Viewport};
use sprocket_engine::input::{MotionAction, MotionEvent};

use crate::sprite::{Sprite, SpriteId};

/// Tuning for the gesture parser, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GestureConfig {
    /// Largest displacement on either axis that still counts as a tap.
    pub tap_threshold: f64,
    /// Size of the box approximating a finger's contact area.
    pub finger_width: f64,
    pub finger_height: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_threshold: 30.0,
            finger_width: 24.0,
            finger_height: 24.0,
        }
    }
}

/// A recognised gesture step. `sprites` lists the candidates that were still
/// visible and enabled when the step completed.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Tap {
        at: Vec2,
        sprites: Vec<SpriteId>,
    },
    Drag {
        start: Vec2,
        prev: Vec2,
        current: Vec2,
        sprites: Vec<SpriteId>,
    },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Phase {
    Idle,
    Down,
    Dragging,
}

/// Turns a down/move/up stream into taps and drag segments.
///
/// Candidates are collected under the finger on down and only ever grow while
/// dragging. A gesture that moved past the tap threshold stays a drag until
/// the pointer is released.
#[derive(Debug)]
pub struct MotionEventParser {
    config: GestureConfig,
    phase: Phase,
    start: Vec2,
    last: Vec2,
    candidates: Vec<SpriteId>,
}

impl MotionEventParser {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            start: Vec2::zero(),
            last: Vec2::zero(),
            candidates: Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    /// Sprites picked up by the current gesture, in pick-up order.
    #[inline]
    pub fn candidates(&self) -> &[SpriteId] {
        &self.candidates
    }

    /// Removes a deleted sprite from the current gesture.
    pub fn forget(&mut self, id: SpriteId) {
        self.candidates.retain(|&c| c != id);
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.start = Vec2::zero();
        self.last = Vec2::zero();
        self.candidates.clear();
    }

    /// Feeds one motion event. `sprites` is the container's membership and
    /// `viewport` its laid-out size.
    pub fn parse(
        &mut self,
        event: &MotionEvent,
        viewport: Viewport,
        sprites: &[Sprite],
    ) -> Option<Gesture> {
        let raw = event.position();
        let p = viewport.clamp_point(Vec2::new(raw.x.trunc(), raw.y.trunc()));

        match event.action {
            MotionAction::Down => {
                self.candidates.clear();
                self.start = p;
                self.last = p;
                self.phase = Phase::Down;
                self.collect(p, viewport, sprites);
                None
            }
            MotionAction::Move => {
                match self.phase {
                    Phase::Idle => {
                        log::warn!("move at ({}, {}) without a preceding down, ignored", p.x, p.y);
                        return None;
                    }
                    Phase::Down => {
                        let moved = (p - self.start).abs();
                        let threshold = self.config.tap_threshold;
                        if moved.x < threshold && moved.y < threshold {
                            return None;
                        }
                        self.phase = Phase::Dragging;
                    }
                    Phase::Dragging => {}
                }

                self.collect(p, viewport, sprites);
                let gesture = Gesture::Drag {
                    start: self.start,
                    prev: self.last,
                    current: p,
                    sprites: self.eligible(sprites),
                };
                self.last = p;
                Some(gesture)
            }
            MotionAction::Up => {
                let gesture = match self.phase {
                    Phase::Idle => {
                        log::warn!("up at ({}, {}) without a preceding down, ignored", p.x, p.y);
                        return None;
                    }
                    Phase::Down => Some(Gesture::Tap {
                        at: self.start,
                        sprites: self.eligible(sprites),
                    }),
                    Phase::Dragging => None,
                };
                self.reset();
                gesture
            }
            MotionAction::Cancel => {
                self.reset();
                None
            }
        }
    }

    fn finger_box(&self, p: Vec2, viewport: Viewport) -> BoundingBox {
        let half_w = (self.config.finger_width / 2.0).trunc();
        let half_h = (self.config.finger_height / 2.0).trunc();
        BoundingBox::new(
            (p.x - half_w).max(0.0),
            (p.y - half_h).max(0.0),
            (p.x + half_w).min(viewport.width - 1.0),
            (p.y + half_h).min(viewport.height - 1.0),
        )
    }

    fn collect(&mut self, p: Vec2, viewport: Viewport, sprites: &[Sprite]) {
        let finger = self.finger_box(p, viewport);
        for sprite in sprites {
            if !self.candidates.contains(&sprite.id())
                && sprite.is_eligible()
                && sprite.intersects_box(&finger)
            {
                self.candidates.push(sprite.id());
            }
        }
    }

    fn eligible(&self, sprites: &[Sprite]) -> Vec<SpriteId> {
        self.candidates
            .iter()
            .copied()
            .filter(|&id| sprites.iter().any(|s| s.id() == id && s.is_eligible()))
            .collect()
    }
}

impl Default for MotionEventParser {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
