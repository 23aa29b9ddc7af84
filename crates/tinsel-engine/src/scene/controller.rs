use crate::backend::{AudioBackend, RenderBackend, SurfaceContext};

use super::{Scene, SceneCtx};

/// Current/pending scene slots and the switch sequence.
///
/// A switch runs, in order: outgoing `on_uninstall`, render reset, audio reset,
/// incoming `on_install`, render resource loading. The resets only run when a
/// scene was current. Two scenes are never installed at the same time.
#[derive(Default)]
pub struct SceneController {
    current: Option<Box<dyn Scene>>,
    pending: Option<Box<dyn Scene>>,
}

impl SceneController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parks `scene` for installation on the next frame. Last request wins.
    pub fn request(&mut self, scene: Box<dyn Scene>) {
        if let Some(dropped) = self.pending.replace(scene) {
            log::debug!("scene '{}' replaced before install", dropped.name());
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn has_current(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&dyn Scene> {
        self.current.as_deref()
    }

    /// Installs the pending scene, if any. Returns `true` if a switch happened.
    pub fn install_pending<R, A>(
        &mut self,
        render: &mut R,
        mut audio: Option<&mut A>,
        surface: &SurfaceContext,
        active: bool,
    ) -> bool
    where
        R: RenderBackend,
        A: AudioBackend,
    {
        let Some(next) = self.pending.take() else {
            return false;
        };

        if let Some(mut outgoing) = self.current.take() {
            log::debug!("uninstalling scene '{}'", outgoing.name());
            outgoing.on_uninstall();
            render.reset();
            if let Some(audio) = audio.as_deref_mut() {
                audio.reset();
            }
        }

        log::debug!("installing scene '{}'", next.name());
        let scene = self.current.insert(next);
        {
            let mut ctx = SceneCtx::new(
                &mut *render as &mut dyn RenderBackend,
                audio.map(|a| a as &mut dyn AudioBackend),
                &mut self.pending,
                active,
            );
            scene.on_install(&mut ctx);
        }
        render.start_loading_resources(surface);
        true
    }

    /// Runs `f` against the current scene. Returns `false` when there is none.
    pub fn with_current<R, A, F>(&mut self, render: &mut R, audio: Option<&mut A>, active: bool, f: F) -> bool
    where
        R: RenderBackend,
        A: AudioBackend,
        F: FnOnce(&mut dyn Scene, &mut SceneCtx<'_>),
    {
        let Some(scene) = self.current.as_deref_mut() else {
            return false;
        };
        let mut ctx = SceneCtx::new(
            &mut *render as &mut dyn RenderBackend,
            audio.map(|a| a as &mut dyn AudioBackend),
            &mut self.pending,
            active,
        );
        f(scene, &mut ctx);
        true
    }

    /// Uninstalls the current scene and discards any pending one.
    pub fn shutdown<R, A>(&mut self, render: &mut R, audio: Option<&mut A>)
    where
        R: RenderBackend,
        A: AudioBackend,
    {
        self.pending = None;
        if let Some(mut outgoing) = self.current.take() {
            log::debug!("uninstalling scene '{}' on shutdown", outgoing.name());
            outgoing.on_uninstall();
            render.reset();
            if let Some(audio) = audio {
                audio.reset();
            }
        }
    }
}
