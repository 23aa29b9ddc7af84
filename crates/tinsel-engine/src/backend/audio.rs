/// Audio subsystem driven by the scene manager and lifecycle tracker.
pub trait AudioBackend {
    /// `false` while sounds for the current scene are still loading.
    fn is_ready(&self) -> bool;

    fn pause(&mut self);

    fn resume(&mut self);

    /// Stops and unloads every scene-owned sound.
    fn reset(&mut self);
}
