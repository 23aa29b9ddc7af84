//! Frame-thread orchestration.
//!
//! [`SceneManager`] is the single object a host talks to: it receives surface,
//! frame, lifecycle and key callbacks, and owns everything the frame loop needs
//! to answer them.

mod config;
mod manager;

pub use config::ManagerConfig;
pub use manager::{AudioFactory, SceneManager};
