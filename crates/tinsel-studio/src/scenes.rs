//! Demo scenes: a pulsing title screen and a touch playground.

use std::collections::HashMap;

use tinsel_engine::coords::{ScreenMapping, Vec2};
use tinsel_engine::input::{Key, PointerId};
use tinsel_engine::scene::{Scene, SceneCtx};

use crate::backdrop::Backdrop;

const STANDBY_COLOR: wgpu::Color = wgpu::Color {
    r: 0.04,
    g: 0.04,
    b: 0.06,
    a: 1.0,
};

pub struct TitleScene {
    backdrop: Backdrop,
    elapsed: f32,
}

impl TitleScene {
    pub fn new(backdrop: Backdrop) -> Self {
        Self { backdrop, elapsed: 0.0 }
    }

    fn start(&self, ctx: &mut SceneCtx<'_>) {
        ctx.request_scene(Box::new(PlayScene::new(self.backdrop.clone())));
    }
}

impl Scene for TitleScene {
    fn name(&self) -> &str {
        "title"
    }

    fn on_install(&mut self, _ctx: &mut SceneCtx<'_>) {
        log::info!("title: tap or press Enter to play");
        self.elapsed = 0.0;
    }

    fn do_frame(&mut self, ctx: &mut SceneCtx<'_>, dt: f32) {
        // Hold the pulse while the host is in the background.
        if ctx.is_active() {
            self.elapsed += dt;
        }
        let pulse = 0.5 + 0.5 * (self.elapsed * 2.0).sin();
        self.backdrop.set(wgpu::Color {
            r: 0.05,
            g: 0.07,
            b: 0.18 + 0.12 * f64::from(pulse),
            a: 1.0,
        });
    }

    fn do_standby_frame(&mut self, _ctx: &mut SceneCtx<'_>, _dt: f32) {
        self.backdrop.set(STANDBY_COLOR);
    }

    fn on_pointer_up(&mut self, ctx: &mut SceneCtx<'_>, _pointer: PointerId, _pos: Vec2) {
        self.start(ctx);
    }

    fn on_key_down(&mut self, ctx: &mut SceneCtx<'_>, key: Key, repeat: u32) {
        if repeat == 0 && matches!(key, Key::Enter | Key::Space) {
            self.start(ctx);
        }
    }
}

/// Tints the backdrop by where the pointers are. Escape returns to the title.
pub struct PlayScene {
    backdrop: Backdrop,
    mapping: ScreenMapping,
    pointers: HashMap<PointerId, Vec2>,
    travel: f32,
}

impl PlayScene {
    pub fn new(backdrop: Backdrop) -> Self {
        Self {
            backdrop,
            mapping: ScreenMapping::default(),
            pointers: HashMap::new(),
            travel: 0.0,
        }
    }

    /// Average pointer position, normalized to the logical canvas.
    fn centroid(&self) -> Option<(f32, f32)> {
        if self.pointers.is_empty() {
            return None;
        }
        let sum = self.pointers.values().fold(Vec2::ZERO, |acc, p| acc + *p);
        let mean = sum * (1.0 / self.pointers.len() as f32);
        let canvas = self.mapping.logical();
        Some((
            (mean.x / canvas.width).clamp(0.0, 1.0),
            (mean.y / canvas.height).clamp(0.0, 1.0),
        ))
    }
}

impl Scene for PlayScene {
    fn name(&self) -> &str {
        "play"
    }

    fn on_install(&mut self, _ctx: &mut SceneCtx<'_>) {
        log::info!("play: drag to paint, Escape for title");
    }

    fn on_uninstall(&mut self) {
        log::debug!("play: {:.0} logical units travelled", self.travel);
    }

    fn on_screen_resized(&mut self, width: u32, height: u32) {
        self.mapping.resize(width, height);
    }

    fn do_frame(&mut self, _ctx: &mut SceneCtx<'_>, _dt: f32) {
        let color = match self.centroid() {
            Some((x, y)) => wgpu::Color {
                r: f64::from(x),
                g: f64::from(y),
                b: 0.35,
                a: 1.0,
            },
            None => wgpu::Color {
                r: 0.1,
                g: 0.1,
                b: 0.12,
                a: 1.0,
            },
        };
        self.backdrop.set(color);
    }

    fn do_standby_frame(&mut self, _ctx: &mut SceneCtx<'_>, _dt: f32) {
        self.backdrop.set(STANDBY_COLOR);
    }

    fn on_pointer_down(&mut self, _ctx: &mut SceneCtx<'_>, pointer: PointerId, pos: Vec2) {
        self.pointers.insert(pointer, pos);
    }

    fn on_pointer_move(&mut self, _ctx: &mut SceneCtx<'_>, pointer: PointerId, pos: Vec2, delta: Vec2) {
        if let Some(p) = self.pointers.get_mut(&pointer) {
            *p = pos;
            self.travel += delta.x.abs() + delta.y.abs();
        }
    }

    fn on_pointer_up(&mut self, _ctx: &mut SceneCtx<'_>, pointer: PointerId, _pos: Vec2) {
        self.pointers.remove(&pointer);
    }

    fn on_key_down(&mut self, ctx: &mut SceneCtx<'_>, key: Key, _repeat: u32) {
        if key == Key::Escape {
            ctx.request_scene(Box::new(TitleScene::new(self.backdrop.clone())));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::ConsoleAudio;
    use crate::renderer::ClearRenderer;
    use tinsel_engine::backend::SurfaceContext;
    use tinsel_engine::core::{ManagerConfig, SceneManager};

    fn studio() -> SceneManager<ClearRenderer, ConsoleAudio> {
        let backdrop = Backdrop::default();
        let mut m = SceneManager::new(ManagerConfig::default(), ClearRenderer::new(backdrop.clone()), ConsoleAudio::open);
        m.on_surface_created(SurfaceContext::new("missing-assets"));
        m.request_scene_switch(Box::new(TitleScene::new(backdrop)));
        m.on_draw_frame();
        m
    }

    #[test]
    fn enter_switches_title_to_play_and_escape_back() {
        let mut m = studio();
        assert_eq!(m.current_scene_name(), Some("title"));

        m.on_key_down(Key::Enter, 0);
        m.on_draw_frame();
        assert_eq!(m.current_scene_name(), Some("play"));

        m.on_key_down(Key::Escape, 0);
        m.on_draw_frame();
        assert_eq!(m.current_scene_name(), Some("title"));
    }

    #[test]
    fn repeated_enter_does_not_start() {
        let mut m = studio();
        m.on_key_down(Key::Enter, 3);
        m.on_draw_frame();
        assert_eq!(m.current_scene_name(), Some("title"));
    }

    #[test]
    fn tap_on_title_starts_play() {
        let mut m = studio();
        let input = m.input_handle();
        input.pointer_down(PointerId(0), 10.0, 10.0);
        input.pointer_up(PointerId(0), 10.0, 10.0);
        m.on_draw_frame();
        m.on_draw_frame();
        assert_eq!(m.current_scene_name(), Some("play"));
    }

    #[test]
    fn centroid_is_normalized_to_canvas() {
        let mut play = PlayScene::new(Backdrop::default());
        play.mapping.resize(1440, 720);
        play.pointers.insert(PointerId(1), Vec2::new(0.0, 0.0));
        play.pointers.insert(PointerId(2), Vec2::new(1440.0, 720.0));
        assert_eq!(play.centroid(), Some((0.5, 0.5)));

        play.pointers.clear();
        assert_eq!(play.centroid(), None);
    }
}
