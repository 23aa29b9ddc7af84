//! Scenes and scene switching.
//!
//! A scene is one mutually exclusive application mode (title screen, level,
//! results). Exactly one scene is current; a switch request parks the next scene
//! in a single pending slot and the switch happens at the start of the next
//! frame.

mod controller;
mod ctx;
mod scene;

pub use controller::SceneController;
pub use ctx::SceneCtx;
pub use scene::Scene;
