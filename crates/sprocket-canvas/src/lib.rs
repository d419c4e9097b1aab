//! Sprocket canvas: sprites that move on a timer, bounce off edges, collide
//! with each other and respond to taps and drags.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use sprocket_canvas::prelude::*;
//!
//! let mut canvas = Canvas::new(CanvasConfig::default());
//! canvas.layout(320.0, 480.0);
//!
//! let ball = SpriteBuilder::new(Ball::new(8.0))
//!     .position(40.0, 40.0)
//!     .heading(30.0)
//!     .speed(4.0)
//!     .interval_ms(30)
//!     .attach(&mut canvas)?;
//!
//! let mut handlers = |canvas: &mut Canvas, target: ComponentId, event: &Event| {
//!     if let (ComponentId::Sprite(id), Event::EdgeReached { edge }) = (target, event) {
//!         if let Some(mut sprite) = canvas.sprite_mut(id) {
//!             sprite.bounce(*edge);
//!         }
//!         return true;
//!     }
//!     false
//! };
//!
//! // Once per host frame:
//! canvas.advance(frame.dt, &mut handlers);
//! if canvas.needs_redraw() {
//!     canvas.paint(&mut draw_list);
//! }
//! ```
//!
//! # Custom sprites
//!
//! Implement [`SpriteShape`](shape::SpriteShape) and hand it to
//! [`SpriteBuilder::new`](sprite::SpriteBuilder::new). Override
//! `contains_point` for anything that is not a rectangle; collisions and touch
//! hit-testing both go through it.

pub mod canvas;
pub mod collision;
pub mod container;
pub mod direction;
pub mod error;
pub mod event;
pub mod gesture;
pub mod shape;
pub mod shapes;
pub mod sprite;
pub mod surface;

pub use canvas::{Canvas, CanvasConfig, Pen};

/// Everything needed to build a scene and react to it.
pub mod prelude {
    pub use crate::canvas::{Canvas, CanvasConfig, Pen, SpriteMut};
    pub use crate::container::ComponentContainer;
    pub use crate::direction::Direction;
    pub use crate::error::SpriteError;
    pub use crate::event::{ComponentId, Event, EventArg, EventDispatcher};
    pub use crate::gesture::GestureConfig;
    pub use crate::shape::{LengthHint, SpriteShape};
    pub use crate::shapes::{Ball, ImageSprite};
    pub use crate::sprite::{Sprite, SpriteBuilder, SpriteId};
    pub use crate::surface::{HeadlessSurface, Surface};

    // Engine primitives sprites and handlers deal in.
    pub use sprocket_engine::coords::{Rect, Vec2};
    pub use sprocket_engine::input::MotionEvent;
    pub use sprocket_engine::paint::Color;
    pub use sprocket_engine::scene::DrawList;
    pub use sprocket_engine::scene::shapes::text::TextAlign;
}
