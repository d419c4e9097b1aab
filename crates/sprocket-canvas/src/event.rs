use sprocket_engine::coords::Vec2;

use crate::canvas::Canvas;
use crate::direction::Direction;
use crate::sprite::SpriteId;

/// Identity of an event source.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ComponentId {
    Canvas,
    Sprite(SpriteId),
}

/// User-visible events raised by the canvas and its sprites.
///
/// Sprite and canvas variants of touch/drag share an interpreter name and
/// differ only in target and the trailing "handled by a sprite" flag.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The target started overlapping `other`. Raised once per collision.
    CollidedWith { other: SpriteId },
    /// The target stopped overlapping `other`.
    NoLongerCollidingWith { other: SpriteId },
    /// The target's motion carried it past `edge`; it has been moved back.
    EdgeReached { edge: Direction },
    /// The target sprite was tapped at `(x, y)`.
    Touched { x: f64, y: f64 },
    /// One segment of a drag that picked up the target sprite.
    Dragged { start: Vec2, prev: Vec2, current: Vec2 },
    /// The canvas was tapped; `touched_sprite` tells whether a sprite got it too.
    CanvasTouched { x: f64, y: f64, touched_sprite: bool },
    /// One segment of a drag on the canvas.
    CanvasDragged { start: Vec2, prev: Vec2, current: Vec2, dragged_sprite: bool },
}

/// Flattened event argument for reflective interpreters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EventArg {
    Number(f64),
    Bool(bool),
    Component(ComponentId),
}

impl Event {
    /// Handler name generated code binds to.
    pub fn name(&self) -> &'static str {
        match self {
            Event::CollidedWith { .. } => "CollidedWith",
            Event::NoLongerCollidingWith { .. } => "NoLongerCollidingWith",
            Event::EdgeReached { .. } => "EdgeReached",
            Event::Touched { .. } | Event::CanvasTouched { .. } => "Touched",
            Event::Dragged { .. } | Event::CanvasDragged { .. } => "Dragged",
        }
    }

    /// Positional handler arguments.
    pub fn args(&self) -> Vec<EventArg> {
        use EventArg::{Bool, Component, Number};

        let points = |start: &Vec2, prev: &Vec2, current: &Vec2| {
            vec![
                Number(start.x),
                Number(start.y),
                Number(prev.x),
                Number(prev.y),
                Number(current.x),
                Number(current.y),
            ]
        };

        match self {
            Event::CollidedWith { other } | Event::NoLongerCollidingWith { other } => {
                vec![Component(ComponentId::Sprite(*other))]
            }
            Event::EdgeReached { edge } => vec![Number(f64::from(edge.code()))],
            Event::Touched { x, y } => vec![Number(*x), Number(*y)],
            Event::Dragged { start, prev, current } => points(start, prev, current),
            Event::CanvasTouched { x, y, touched_sprite } => {
                vec![Number(*x), Number(*y), Bool(*touched_sprite)]
            }
            Event::CanvasDragged { start, prev, current, dragged_sprite } => {
                let mut args = points(start, prev, current);
                args.push(Bool(*dragged_sprite));
                args
            }
        }
    }
}

/// Delivers events to user-authored handler code.
///
/// Called from the canvas run loop with exclusive access to the canvas, so a
/// handler may move sprites, bounce them or delete them. Anything those calls
/// raise is queued behind the current event; handlers never nest.
///
/// The return value reports whether a handler ran. The canvas itself does not
/// act on it.
pub trait EventDispatcher {
    fn dispatch(&mut self, canvas: &mut Canvas, target: ComponentId, event: &Event) -> bool;
}

impl<F> EventDispatcher for F
where
    F: FnMut(&mut Canvas, ComponentId, &Event) -> bool,
{
    fn dispatch(&mut self, canvas: &mut Canvas, target: ComponentId, event: &Event) -> bool {
        self(canvas, target, event)
    }
}
