use crate::backend::{AudioBackend, RenderBackend};

use super::Scene;

/// Context passed to scene callbacks.
///
/// Lifetime `'a` covers one callback invocation.
pub struct SceneCtx<'a> {
    render: &'a mut dyn RenderBackend,
    audio: Option<&'a mut dyn AudioBackend>,
    pending: &'a mut Option<Box<dyn Scene>>,
    active: bool,
}

impl<'a> SceneCtx<'a> {
    pub(crate) fn new(
        render: &'a mut dyn RenderBackend,
        audio: Option<&'a mut dyn AudioBackend>,
        pending: &'a mut Option<Box<dyn Scene>>,
        active: bool,
    ) -> Self {
        Self { render, audio, pending, active }
    }

    pub fn render(&mut self) -> &mut (dyn RenderBackend + 'a) {
        &mut *self.render
    }

    /// `None` when the audio subsystem failed to start.
    pub fn audio(&mut self) -> Option<&mut (dyn AudioBackend + 'a)> {
        self.audio.as_deref_mut()
    }

    /// Whether the host is resumed and focused.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Requests a switch at the start of the next frame. Replaces any earlier
    /// request that has not been installed yet.
    pub fn request_scene(&mut self, scene: Box<dyn Scene>) {
        *self.pending = Some(scene);
    }
}
