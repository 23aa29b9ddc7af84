use super::{Vec2, Viewport};

/// Maps screen-space pixels onto a logical canvas.
///
/// The logical canvas keeps a fixed height; its width follows the surface aspect
/// ratio, so horizontal extent grows on wide screens instead of stretching
/// content. Positions and deltas scale by the same factor; deltas ignore the
/// origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenMapping {
    screen: Viewport,
    logical_height: f32,
}

impl ScreenMapping {
    pub fn new(logical_height: f32) -> Self {
        Self {
            screen: Viewport::default(),
            logical_height,
        }
    }

    /// Updates the physical surface size. Zero-sized surfaces are recorded but
    /// conversions fall back to identity until a valid size arrives.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.screen = Viewport::new(width as f32, height as f32);
    }

    pub fn screen(&self) -> Viewport {
        self.screen
    }

    /// Logical canvas size for the current surface.
    pub fn logical(&self) -> Viewport {
        Viewport::new(self.logical_height * self.screen.aspect(), self.logical_height)
    }

    #[inline]
    fn scale(&self) -> f32 {
        if self.screen.is_valid() {
            self.logical_height / self.screen.height
        } else {
            1.0
        }
    }

    #[inline]
    pub fn x(&self, screen_x: f32) -> f32 {
        screen_x * self.scale()
    }

    #[inline]
    pub fn y(&self, screen_y: f32) -> f32 {
        screen_y * self.scale()
    }

    #[inline]
    pub fn delta_x(&self, dx: f32) -> f32 {
        dx * self.scale()
    }

    #[inline]
    pub fn delta_y(&self, dy: f32) -> f32 {
        dy * self.scale()
    }

    pub fn point(&self, p: Vec2) -> Vec2 {
        Vec2::new(self.x(p.x), self.y(p.y))
    }
}

impl Default for ScreenMapping {
    fn default() -> Self {
        Self::new(720.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_before_first_resize() {
        let m = ScreenMapping::new(720.0);
        assert_eq!(m.point(Vec2::new(12.0, 34.0)), Vec2::new(12.0, 34.0));
    }

    #[test]
    fn scales_to_logical_height() {
        let mut m = ScreenMapping::new(720.0);
        m.resize(2560, 1440);
        assert_eq!(m.x(1280.0), 640.0);
        assert_eq!(m.y(1440.0), 720.0);
        assert_eq!(m.delta_y(-20.0), -10.0);
        assert_eq!(m.logical(), Viewport::new(1280.0, 720.0));
    }

    #[test]
    fn zero_height_surface_is_identity() {
        let mut m = ScreenMapping::new(720.0);
        m.resize(800, 0);
        assert_eq!(m.delta_x(5.0), 5.0);
        assert_eq!(m.logical().height, 720.0);
    }
}
