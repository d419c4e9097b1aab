//! Time subsystem.
//!
//! - [`Timer`]: one repeating alarm per owner, scheduled on a [`Looper`](crate::looper::Looper)
//! - [`FrameClock`]: wall-clock deltas for hosts that drive a looper in real time

mod frame_clock;
mod timer;

pub use frame_clock::{FrameClock, FrameTime};
pub use timer::{Timer, DEFAULT_INTERVAL_MS};
