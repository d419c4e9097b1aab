//! Window-system adapters. Each adapter is behind the cargo feature of the
//! same name.

pub mod winit;
