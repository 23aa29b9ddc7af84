//! Frame timing.
//!
//! One `FrameClock` per frame loop; call `tick()` once per advanced frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
