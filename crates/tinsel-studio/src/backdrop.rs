use std::cell::Cell;
use std::rc::Rc;

/// Clear color shared between the demo scenes (writers) and the renderer
/// (reader). Frame-thread only.
#[derive(Debug, Clone)]
pub struct Backdrop(Rc<Cell<wgpu::Color>>);

impl Backdrop {
    pub fn new(color: wgpu::Color) -> Self {
        Self(Rc::new(Cell::new(color)))
    }

    pub fn get(&self) -> wgpu::Color {
        self.0.get()
    }

    pub fn set(&self, color: wgpu::Color) {
        self.0.set(color);
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new(wgpu::Color::BLACK)
    }
}
