//! Collaborator contracts: the render and audio subsystems the manager drives.
//!
//! The engine never draws or plays anything itself. It sequences these calls
//! around scene switches and frames, and asks the render backend to convert
//! screen-space input into the logical space scenes work in.

mod audio;
mod render;
mod surface;

pub use audio::AudioBackend;
pub use render::RenderBackend;
pub use surface::SurfaceContext;
