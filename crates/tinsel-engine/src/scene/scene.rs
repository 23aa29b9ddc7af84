use crate::coords::Vec2;
use crate::input::{Key, PointerId};

use super::SceneCtx;

/// Application mode driven by the scene manager.
///
/// Every callback runs on the frame thread. Pointer positions and deltas arrive
/// in logical coordinates (already converted by the render backend).
pub trait Scene {
    /// Short label used in logs.
    fn name(&self) -> &str {
        "scene"
    }

    /// The scene became current. Register resources with the backends here; the
    /// render backend starts loading them right after this returns.
    fn on_install(&mut self, ctx: &mut SceneCtx<'_>) {
        let _ = ctx;
    }

    /// The scene stops being current. Called before the backends are reset.
    fn on_uninstall(&mut self) {}

    fn on_screen_resized(&mut self, width: u32, height: u32) {
        let _ = (width, height);
    }

    /// Normal per-frame update, called when the render backend prepared a frame
    /// and audio is ready.
    fn do_frame(&mut self, ctx: &mut SceneCtx<'_>, dt: f32);

    /// Degraded per-frame update while resources are still loading.
    fn do_standby_frame(&mut self, ctx: &mut SceneCtx<'_>, dt: f32) {
        let _ = (ctx, dt);
    }

    fn on_pointer_down(&mut self, ctx: &mut SceneCtx<'_>, pointer: PointerId, pos: Vec2) {
        let _ = (ctx, pointer, pos);
    }

    fn on_pointer_move(&mut self, ctx: &mut SceneCtx<'_>, pointer: PointerId, pos: Vec2, delta: Vec2) {
        let _ = (ctx, pointer, pos, delta);
    }

    fn on_pointer_up(&mut self, ctx: &mut SceneCtx<'_>, pointer: PointerId, pos: Vec2) {
        let _ = (ctx, pointer, pos);
    }

    /// `repeat` is 0 for the initial press and counts auto-repeats after that.
    fn on_key_down(&mut self, ctx: &mut SceneCtx<'_>, key: Key, repeat: u32) {
        let _ = (ctx, key, repeat);
    }

    fn on_key_up(&mut self, ctx: &mut SceneCtx<'_>, key: Key) {
        let _ = (ctx, key);
    }
}
