//! Tinsel engine crate.
//!
//! Frame-thread orchestration for interactive applications: one scene at a time,
//! switched between frames; touch input queued from any thread and dispatched in
//! logical coordinates; host lifecycle folded into a single "active" signal that
//! drives audio.

pub mod backend;
pub mod coords;
pub mod core;
pub mod input;
pub mod lifecycle;
pub mod scene;
pub mod time;
pub mod window;

pub mod logging;

#[cfg(test)]
mod testing;
