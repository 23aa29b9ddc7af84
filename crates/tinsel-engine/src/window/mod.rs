//! Desktop host.
//!
//! Owns the `winit` event loop and window, and translates platform callbacks
//! into [`SceneManager`](crate::core::SceneManager) calls.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
