//! Input subsystem.
//!
//! Touch input crosses threads: the host's input thread is the producer and the
//! frame loop is the consumer. The producer only touches [`InputHandle`] (and,
//! through it, the point cache and event pool); the frame loop drains the queue
//! once per frame. Key input is delivered synchronously on the frame thread.

mod points;
mod pool;
mod queue;
mod types;

pub mod platform;

pub use points::PointCache;
pub use pool::EventPool;
pub use queue::{InputHandle, MotionBatch, MotionEventQueue};
pub use types::{Key, MotionKind, PendingMotionEvent, PointerId, TouchAction, TouchBatch, TouchPoint};
