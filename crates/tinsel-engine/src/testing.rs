//! Recording doubles for unit tests.
//!
//! Every double appends to a shared call log so tests can assert on the exact
//! interleaving of scene, render, and audio calls.

use std::cell::RefCell;
use std::rc::Rc;

use crate::backend::{AudioBackend, RenderBackend, SurfaceContext};
use crate::coords::Vec2;
use crate::input::{Key, PointerId};
use crate::scene::{Scene, SceneCtx};

pub(crate) type CallLog = Rc<RefCell<Vec<String>>>;

pub(crate) fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Drains the log.
pub(crate) fn take(log: &CallLog) -> Vec<String> {
    std::mem::take(&mut *log.borrow_mut())
}

pub(crate) struct RecordingRenderer {
    log: CallLog,
    pub prepared: bool,
    /// Screen → logical scale.
    pub scale: f32,
}

impl RecordingRenderer {
    pub(crate) fn new(log: &CallLog) -> Self {
        Self { log: log.clone(), prepared: true, scale: 1.0 }
    }

    fn push(&self, entry: String) {
        self.log.borrow_mut().push(entry);
    }
}

impl RenderBackend for RecordingRenderer {
    fn on_surface_created(&mut self, surface: &SurfaceContext) {
        self.push(format!("render.surface {}", surface.asset_root().display()));
    }

    fn on_surface_changed(&mut self, width: u32, height: u32) {
        self.push(format!("render.resize {width}x{height}"));
    }

    fn prepare_frame(&mut self) -> bool {
        self.prepared
    }

    fn do_frame(&mut self) {
        self.push("render.frame".into());
    }

    fn reset(&mut self) {
        self.push("render.reset".into());
    }

    fn start_loading_resources(&mut self, _surface: &SurfaceContext) {
        self.push("render.load".into());
    }

    fn convert_screen_x(&self, x: f32) -> f32 {
        x * self.scale
    }

    fn convert_screen_y(&self, y: f32) -> f32 {
        y * self.scale
    }

    fn convert_screen_delta_x(&self, dx: f32) -> f32 {
        dx * self.scale
    }

    fn convert_screen_delta_y(&self, dy: f32) -> f32 {
        dy * self.scale
    }
}

pub(crate) struct RecordingAudio {
    log: CallLog,
    pub ready: bool,
}

impl RecordingAudio {
    pub(crate) fn new(log: &CallLog) -> Self {
        Self { log: log.clone(), ready: true }
    }
}

impl AudioBackend for RecordingAudio {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn pause(&mut self) {
        self.log.borrow_mut().push("audio.pause".into());
    }

    fn resume(&mut self) {
        self.log.borrow_mut().push("audio.resume".into());
    }

    fn reset(&mut self) {
        self.log.borrow_mut().push("audio.reset".into());
    }
}

pub(crate) struct RecordingScene {
    name: &'static str,
    log: CallLog,
    /// Requested from `on_key_down`, once.
    next: Option<Box<dyn Scene>>,
}

impl RecordingScene {
    pub(crate) fn new(name: &'static str, log: &CallLog) -> Self {
        Self { name, log: log.clone(), next: None }
    }

    pub(crate) fn boxed(name: &'static str, log: &CallLog) -> Box<dyn Scene> {
        Box::new(Self::new(name, log))
    }

    pub(crate) fn switching_to(mut self, next: Box<dyn Scene>) -> Self {
        self.next = Some(next);
        self
    }

    fn push(&self, what: String) {
        self.log.borrow_mut().push(format!("{}.{what}", self.name));
    }
}

impl Scene for RecordingScene {
    fn name(&self) -> &str {
        self.name
    }

    fn on_install(&mut self, _ctx: &mut SceneCtx<'_>) {
        self.push("install".into());
    }

    fn on_uninstall(&mut self) {
        self.push("uninstall".into());
    }

    fn on_screen_resized(&mut self, width: u32, height: u32) {
        self.push(format!("resize {width}x{height}"));
    }

    fn do_frame(&mut self, _ctx: &mut SceneCtx<'_>, dt: f32) {
        self.push(format!("frame {dt}"));
    }

    fn do_standby_frame(&mut self, _ctx: &mut SceneCtx<'_>, dt: f32) {
        self.push(format!("standby {dt}"));
    }

    fn on_pointer_down(&mut self, _ctx: &mut SceneCtx<'_>, pointer: PointerId, pos: Vec2) {
        self.push(format!("down {pointer} ({},{})", pos.x, pos.y));
    }

    fn on_pointer_move(&mut self, _ctx: &mut SceneCtx<'_>, pointer: PointerId, pos: Vec2, delta: Vec2) {
        self.push(format!("move {pointer} ({},{}) d({},{})", pos.x, pos.y, delta.x, delta.y));
    }

    fn on_pointer_up(&mut self, _ctx: &mut SceneCtx<'_>, pointer: PointerId, pos: Vec2) {
        self.push(format!("up {pointer} ({},{})", pos.x, pos.y));
    }

    fn on_key_down(&mut self, ctx: &mut SceneCtx<'_>, key: Key, repeat: u32) {
        self.push(format!("key_down {key} {repeat}"));
        if let Some(next) = self.next.take() {
            ctx.request_scene(next);
        }
    }

    fn on_key_up(&mut self, _ctx: &mut SceneCtx<'_>, key: Key) {
        self.push(format!("key_up {key}"));
    }
}
