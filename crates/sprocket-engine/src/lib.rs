//! Sprocket engine crate.
//!
//! Host-neutral building blocks for the sprite runtime: geometry, colors,
//! draw lists, pointer input, the single-consumer task queue and its timers,
//! media loading, and logging setup. Nothing here knows about sprites.

pub mod assets;
pub mod coords;
pub mod input;
pub mod logging;
pub mod looper;
pub mod paint;
pub mod scene;
pub mod time;
