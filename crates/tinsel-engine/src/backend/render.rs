use super::SurfaceContext;

/// Render subsystem driven by the scene manager.
///
/// All methods are called from the frame thread.
pub trait RenderBackend {
    /// A drawing surface became available.
    fn on_surface_created(&mut self, surface: &SurfaceContext);

    /// The drawing surface changed size (physical pixels).
    fn on_surface_changed(&mut self, width: u32, height: u32);

    /// Returns `true` if a full frame can be drawn (surface acquired, resources
    /// loaded). `false` sends the current scene to its standby update.
    fn prepare_frame(&mut self) -> bool;

    /// Submits the frame. Called every frame, whatever `prepare_frame` returned.
    fn do_frame(&mut self);

    /// Drops every scene-owned resource. Called between uninstalling one scene
    /// and installing the next.
    fn reset(&mut self);

    /// Starts loading the resources registered by a freshly installed scene.
    /// Loading may complete over later frames.
    fn start_loading_resources(&mut self, surface: &SurfaceContext);

    fn convert_screen_x(&self, x: f32) -> f32;
    fn convert_screen_y(&self, y: f32) -> f32;
    fn convert_screen_delta_x(&self, dx: f32) -> f32;
    fn convert_screen_delta_y(&self, dy: f32) -> f32;
}
