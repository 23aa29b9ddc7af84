//! Tinsel studio: a desktop demo of the scene manager.
//!
//! Opens a window, shows a title scene, and switches to a touch playground on
//! tap or Enter. Escape returns to the title; the back key closes the window.

mod audio;
mod backdrop;
mod gpu;
mod renderer;
mod scenes;

use anyhow::Result;
use winit::dpi::LogicalSize;

use tinsel_engine::core::{ManagerConfig, SceneManager};
use tinsel_engine::logging::{init_logging, LoggingConfig};
use tinsel_engine::window::{Runtime, RuntimeConfig};

use crate::audio::ConsoleAudio;
use crate::backdrop::Backdrop;
use crate::renderer::ClearRenderer;
use crate::scenes::TitleScene;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let backdrop = Backdrop::default();
    let renderer = ClearRenderer::new(backdrop.clone());

    let mut manager = SceneManager::new(ManagerConfig::default(), renderer, ConsoleAudio::open);
    manager.request_scene_switch(Box::new(TitleScene::new(backdrop)));

    Runtime::run(
        RuntimeConfig {
            title: "Tinsel Studio".to_string(),
            initial_size: LogicalSize::new(960.0, 540.0),
            ..RuntimeConfig::default()
        },
        manager,
    )
}
