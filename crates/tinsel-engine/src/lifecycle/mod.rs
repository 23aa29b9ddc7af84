//! Host application lifecycle: resumed/focus tracking and the derived
//! "should be active" signal.

mod tracker;

pub use tracker::{ActivityPresence, AudioDirective, LifecycleTracker};
