use std::path::{Path, PathBuf};
use std::sync::Arc;

use winit::window::Window;

/// Context handed to backends when a surface is created and when resources load.
///
/// `window` is `None` for headless hosts; render backends that need a native
/// surface must treat that as "no surface".
#[derive(Debug, Clone)]
pub struct SurfaceContext {
    asset_root: PathBuf,
    window: Option<Arc<Window>>,
}

impl SurfaceContext {
    pub fn new(asset_root: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: asset_root.into(),
            window: None,
        }
    }

    pub fn with_window(mut self, window: Arc<Window>) -> Self {
        self.window = Some(window);
        self
    }

    /// Directory resources are loaded from.
    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }

    pub fn window(&self) -> Option<&Arc<Window>> {
        self.window.as_ref()
    }
}

impl Default for SurfaceContext {
    fn default() -> Self {
        Self::new("assets")
    }
}
