//! Coordinate types shared by the input queue, scenes, and render backends.
//!
//! Two spaces exist:
//! - screen space: physical surface pixels as reported by the host (origin top-left)
//! - logical space: the canvas scenes are written against, chosen by the render backend
//!
//! Input is queued in screen space and converted at dispatch time, so a resize
//! between enqueue and drain is reflected in the values a scene sees.

mod mapping;
mod vec2;
mod viewport;

pub use mapping::ScreenMapping;
pub use vec2::Vec2;
pub use viewport::Viewport;
