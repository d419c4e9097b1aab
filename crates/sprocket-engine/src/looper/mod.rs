//! Single-consumer task queue.
//!
//! Every asynchronous source in a scene (timer alarms, pointer input, user
//! event delivery) is posted here and executed one task at a time by the
//! owner, so a task always runs to completion before the next starts.
//!
//! The queue keeps its own clock. Hosts drive it forward with the wall clock
//! (see [`crate::time::FrameClock`]); tests drive it with exact durations.

mod queue;

pub use queue::{Looper, TaskId};
