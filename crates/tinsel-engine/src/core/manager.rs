use std::any::Any;
use std::sync::Arc;

use anyhow::Result;

use crate::backend::{AudioBackend, RenderBackend, SurfaceContext};
use crate::coords::Vec2;
use crate::input::{InputHandle, Key, MotionBatch, MotionEventQueue, MotionKind, PendingMotionEvent, TouchBatch};
use crate::lifecycle::{ActivityPresence, AudioDirective, LifecycleTracker};
use crate::scene::{Scene, SceneController};
use crate::time::FrameClock;

use super::config::ManagerConfig;

/// Builds the audio subsystem the first time a render surface appears.
pub type AudioFactory<A> = Box<dyn FnMut(&SurfaceContext) -> Result<A>>;

/// Owns the frame loop's view of the application: scenes, backends, frame
/// clock, lifecycle flags, and the consumer side of the input queue.
///
/// Every `&mut self` method must be called from the frame thread (or from host
/// callbacks the host serializes with it). Touch input from other threads goes
/// through [`InputHandle`]s obtained from [`input_handle`](Self::input_handle).
pub struct SceneManager<R, A> {
    renderer: R,
    audio: Option<A>,
    audio_factory: AudioFactory<A>,
    surface: Option<SurfaceContext>,

    scenes: SceneController,
    clock: FrameClock,
    lifecycle: LifecycleTracker,

    queue: Arc<MotionEventQueue>,
    batch: MotionBatch,
}

impl<R, A> SceneManager<R, A>
where
    R: RenderBackend,
    A: AudioBackend,
{
    pub fn new<F>(config: ManagerConfig, renderer: R, audio_factory: F) -> Self
    where
        F: FnMut(&SurfaceContext) -> Result<A> + 'static,
    {
        Self {
            renderer,
            audio: None,
            audio_factory: Box::new(audio_factory),
            surface: None,
            scenes: SceneController::new(),
            clock: FrameClock::new(),
            lifecycle: LifecycleTracker::new(),
            queue: Arc::new(MotionEventQueue::new(config.event_capacity, config.point_capacity)),
            batch: MotionBatch::with_capacity(config.event_capacity),
        }
    }

    /// Producer handle for the input thread.
    pub fn input_handle(&self) -> InputHandle {
        InputHandle::new(Arc::clone(&self.queue))
    }

    // ── surface ───────────────────────────────────────────────────────────

    pub fn on_surface_created(&mut self, surface: SurfaceContext) {
        log::info!("render surface created (assets at {})", surface.asset_root().display());
        self.renderer.on_surface_created(&surface);

        if self.audio.is_none() {
            match (self.audio_factory)(&surface) {
                Ok(audio) => self.audio = Some(audio),
                Err(e) => log::error!("audio subsystem unavailable: {e:#}"),
            }
        }

        self.surface = Some(surface);
    }

    pub fn on_surface_changed(&mut self, width: u32, height: u32) {
        log::debug!("render surface resized to {width}x{height}");
        self.renderer.on_surface_changed(width, height);

        let active = self.lifecycle.is_active();
        self.scenes
            .with_current(&mut self.renderer, self.audio.as_mut(), active, |scene, _| {
                scene.on_screen_resized(width, height);
            });
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Drives one frame: scene switch, scene update, render submission, input
    /// dispatch. Skipped with a warning while no surface exists.
    pub fn on_draw_frame(&mut self) {
        let Some(surface) = self.surface.as_ref() else {
            log::warn!("ignoring frame request without a render surface");
            return;
        };
        let active = self.lifecycle.is_active();

        self.scenes
            .install_pending(&mut self.renderer, self.audio.as_mut(), surface, active);

        if self.scenes.has_current() {
            let dt = self.clock.tick().dt;
            // Missing audio never holds a scene in standby.
            let ready = self.renderer.prepare_frame()
                && self.audio.as_ref().is_none_or(|audio| audio.is_ready());

            self.scenes
                .with_current(&mut self.renderer, self.audio.as_mut(), active, |scene, ctx| {
                    if ready {
                        scene.do_frame(ctx, dt);
                    } else {
                        scene.do_standby_frame(ctx, dt);
                    }
                });
        }

        self.renderer.do_frame();

        if self.queue.has_pending() {
            self.process_motion_events();
        }
    }

    fn process_motion_events(&mut self) {
        let Self {
            renderer,
            audio,
            scenes,
            lifecycle,
            queue,
            batch,
            ..
        } = self;
        let active = lifecycle.is_active();

        queue.process(batch, |event| {
            dispatch_motion(&mut *scenes, &mut *renderer, audio.as_mut(), active, event);
        });
    }

    // ── scenes ────────────────────────────────────────────────────────────

    /// Switches to `scene` at the start of the next frame. A later request
    /// before that frame replaces this one.
    pub fn request_scene_switch(&mut self, scene: Box<dyn Scene>) {
        self.scenes.request(scene);
    }

    pub fn has_scene(&self) -> bool {
        self.scenes.has_current()
    }

    pub fn current_scene_name(&self) -> Option<&str> {
        self.scenes.current().map(|scene| scene.name())
    }

    // ── keys ──────────────────────────────────────────────────────────────

    /// Routes a key press to the current scene. Returns `false` for keys the
    /// host should handle itself ([`Key::Back`]).
    pub fn on_key_down(&mut self, key: Key, repeat: u32) -> bool {
        if key == Key::Back {
            return false;
        }
        let active = self.lifecycle.is_active();
        self.scenes
            .with_current(&mut self.renderer, self.audio.as_mut(), active, |scene, ctx| {
                scene.on_key_down(ctx, key, repeat);
            });
        true
    }

    pub fn on_key_up(&mut self, key: Key) -> bool {
        if key == Key::Back {
            return false;
        }
        let active = self.lifecycle.is_active();
        self.scenes
            .with_current(&mut self.renderer, self.audio.as_mut(), active, |scene, ctx| {
                scene.on_key_up(ctx, key);
            });
        true
    }

    /// Producer-side entry point for hosts that deliver multi-touch reports on
    /// the frame thread.
    pub fn on_touch_batch(&self, batch: TouchBatch<'_>) {
        self.queue.enqueue_batch(batch);
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    pub fn on_pause(&mut self) {
        log::debug!("host paused");
        let directive = self.lifecycle.on_pause();
        self.apply_audio(directive);
    }

    /// `host` is held weakly until the next pause.
    pub fn on_resume<T>(&mut self, host: &Arc<T>)
    where
        T: Any + Send + Sync,
    {
        log::debug!("host resumed");
        let directive = self.lifecycle.on_resume(host);
        self.apply_audio(directive);
    }

    pub fn on_focus_changed(&mut self, focus: bool) {
        log::debug!("host focus {}", if focus { "gained" } else { "lost" });
        let directive = self.lifecycle.on_focus_changed(focus);
        self.apply_audio(directive);
    }

    fn apply_audio(&mut self, directive: AudioDirective) {
        let Some(audio) = self.audio.as_mut() else {
            return;
        };
        match directive {
            AudioDirective::Pause => audio.pause(),
            AudioDirective::Resume => audio.resume(),
            AudioDirective::Keep => {}
        }
    }

    /// Whether gameplay and audio should be running.
    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    pub fn presence(&self) -> ActivityPresence {
        self.lifecycle.presence()
    }

    /// The host passed to the last `on_resume`, unless paused since or dropped.
    pub fn host<T>(&self) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.lifecycle.host()
    }

    // ── backends ──────────────────────────────────────────────────────────

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn audio_mut(&mut self) -> Option<&mut A> {
        self.audio.as_mut()
    }

    /// Uninstalls the current scene, resets both backends, and forgets the
    /// surface. Frames are skipped until a new surface is created.
    pub fn shutdown(&mut self) {
        log::debug!("scene manager shutting down");
        self.scenes.shutdown(&mut self.renderer, self.audio.as_mut());
        self.surface = None;
        self.clock.reset();
    }
}

fn dispatch_motion<R, A>(
    scenes: &mut SceneController,
    renderer: &mut R,
    audio: Option<&mut A>,
    active: bool,
    event: &PendingMotionEvent,
) where
    R: RenderBackend,
    A: AudioBackend,
{
    let pos = Vec2::new(
        renderer.convert_screen_x(event.pos.x),
        renderer.convert_screen_y(event.pos.y),
    );
    let delta = Vec2::new(
        renderer.convert_screen_delta_x(event.delta.x),
        renderer.convert_screen_delta_y(event.delta.y),
    );

    // No current scene: the event is dropped.
    scenes.with_current(renderer, audio, active, |scene, ctx| match event.kind {
        MotionKind::Down => scene.on_pointer_down(ctx, event.pointer, pos),
        MotionKind::Move => scene.on_pointer_move(ctx, event.pointer, pos, delta),
        MotionKind::Up => scene.on_pointer_up(ctx, event.pointer, pos),
    });
}
