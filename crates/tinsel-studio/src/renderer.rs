use tinsel_engine::backend::{RenderBackend, SurfaceContext};
use tinsel_engine::coords::ScreenMapping;

use crate::backdrop::Backdrop;
use crate::gpu::{GpuSurface, SurfaceErrorAction};

/// Frames a freshly installed scene spends "loading" before full frames start.
const LOAD_FRAMES: u32 = 24;

const LOADING_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.03,
    a: 1.0,
};

/// Counts down simulated resource loading, one step per prepared frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoadProgress {
    remaining: u32,
}

impl LoadProgress {
    pub fn start(&mut self, frames: u32) {
        self.remaining = frames;
    }

    /// Advances by one frame. Returns `true` once loading has finished.
    pub fn step(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }
}

/// Render backend that clears the window to the scene's backdrop color.
///
/// Without a window (headless hosts, tests) it still tracks loading and screen
/// mapping but never reports a full frame.
pub struct ClearRenderer {
    gpu: Option<GpuSurface>,
    mapping: ScreenMapping,
    backdrop: Backdrop,
    loading: LoadProgress,
}

impl ClearRenderer {
    pub fn new(backdrop: Backdrop) -> Self {
        Self {
            gpu: None,
            mapping: ScreenMapping::default(),
            backdrop,
            loading: LoadProgress::default(),
        }
    }

    #[cfg(test)]
    fn has_gpu(&self) -> bool {
        self.gpu.is_some()
    }

    #[cfg(test)]
    fn mapping(&self) -> ScreenMapping {
        self.mapping
    }

    #[cfg(test)]
    fn is_loading(&self) -> bool {
        !self.loading.is_done()
    }
}

impl RenderBackend for ClearRenderer {
    fn on_surface_created(&mut self, surface: &SurfaceContext) {
        let Some(window) = surface.window() else {
            log::warn!("surface created without a window; rendering disabled");
            return;
        };
        if self.gpu.is_some() {
            return;
        }

        match pollster::block_on(GpuSurface::new(window.clone())) {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(e) => log::error!("gpu initialization failed: {e:#}"),
        }
    }

    fn on_surface_changed(&mut self, width: u32, height: u32) {
        self.mapping.resize(width, height);
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize(width, height);
        }
    }

    fn prepare_frame(&mut self) -> bool {
        let loaded = self.loading.step();
        loaded && self.gpu.is_some()
    }

    fn do_frame(&mut self) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };

        let color = if self.loading.is_done() {
            self.backdrop.get()
        } else {
            LOADING_COLOR
        };

        let Err(err) = gpu.clear(color) else {
            return;
        };
        match gpu.handle_surface_error(err) {
            SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {}
            SurfaceErrorAction::Fatal => {
                log::error!("gpu out of memory; rendering disabled");
                self.gpu = None;
            }
        }
    }

    fn reset(&mut self) {
        self.backdrop.set(wgpu::Color::BLACK);
        self.loading = LoadProgress::default();
    }

    fn start_loading_resources(&mut self, surface: &SurfaceContext) {
        log::debug!("loading scene resources from {}", surface.asset_root().display());
        self.loading.start(LOAD_FRAMES);
    }

    fn convert_screen_x(&self, x: f32) -> f32 {
        self.mapping.x(x)
    }

    fn convert_screen_y(&self, y: f32) -> f32 {
        self.mapping.y(y)
    }

    fn convert_screen_delta_x(&self, dx: f32) -> f32 {
        self.mapping.delta_x(dx)
    }

    fn convert_screen_delta_y(&self, dy: f32) -> f32 {
        self.mapping.delta_y(dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_progress_counts_down() {
        let mut loading = LoadProgress::default();
        assert!(loading.step());

        loading.start(2);
        assert!(!loading.step());
        assert!(!loading.step());
        assert!(loading.step());
        assert!(loading.is_done());
    }

    #[test]
    fn headless_renderer_never_reports_full_frame() {
        let mut r = ClearRenderer::new(Backdrop::default());
        r.on_surface_created(&SurfaceContext::default());
        assert!(!r.has_gpu());
        assert!(!r.prepare_frame());
        r.do_frame();
    }

    #[test]
    fn reset_restores_black_backdrop_and_stops_loading() {
        let backdrop = Backdrop::default();
        let mut r = ClearRenderer::new(backdrop.clone());
        backdrop.set(wgpu::Color::RED);
        r.start_loading_resources(&SurfaceContext::default());
        assert!(r.is_loading());

        r.reset();
        assert_eq!(backdrop.get(), wgpu::Color::BLACK);
        assert!(!r.is_loading());
    }

    #[test]
    fn conversions_follow_surface_size() {
        let mut r = ClearRenderer::new(Backdrop::default());
        r.on_surface_changed(1440, 1440);
        assert_eq!(r.convert_screen_x(720.0), 360.0);
        assert_eq!(r.convert_screen_delta_y(-20.0), -10.0);
        assert_eq!(r.mapping().logical().width, 720.0);
    }
}
