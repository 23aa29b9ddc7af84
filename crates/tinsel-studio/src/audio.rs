use std::path::PathBuf;

use anyhow::Result;
use tinsel_engine::backend::{AudioBackend, SurfaceContext};

/// Audio backend that only reports what it would do.
///
/// Stands in for a real mixer: the demo has no sounds, but the lifecycle
/// transitions are worth seeing in the log.
#[derive(Debug)]
pub struct ConsoleAudio {
    sounds: PathBuf,
    paused: bool,
}

impl ConsoleAudio {
    pub fn open(surface: &SurfaceContext) -> Result<Self> {
        let sounds = surface.asset_root().join("sounds");
        if !sounds.is_dir() {
            log::warn!("no sound directory at {}; audio stays silent", sounds.display());
        }
        log::info!("audio opened");
        Ok(Self {
            sounds,
            paused: true,
        })
    }

    #[cfg(test)]
    fn is_paused(&self) -> bool {
        self.paused
    }
}

impl AudioBackend for ConsoleAudio {
    fn is_ready(&self) -> bool {
        true
    }

    fn pause(&mut self) {
        if !self.paused {
            log::info!("audio paused");
        }
        self.paused = true;
    }

    fn resume(&mut self) {
        if self.paused {
            log::info!("audio resumed");
        }
        self.paused = false;
    }

    fn reset(&mut self) {
        log::debug!("unloading sounds from {}", self.sounds.display());
    }
}
