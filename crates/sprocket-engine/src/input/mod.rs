//! Input subsystem.
//!
//! Public API is platform-agnostic. Hosts translate their window-system
//! events into [`InputEvent`]s and feed them through a [`PointerTracker`],
//! which yields the single-pointer [`MotionEvent`] stream gesture parsing
//! consumes.

#[cfg(feature = "winit")]
pub mod platform;

mod tracker;
mod types;

pub use tracker::PointerTracker;
pub use types::{
    InputEvent,
    MotionAction,
    MotionEvent,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
    TouchEvent,
    TouchPhase,
};
