use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::backend::{AudioBackend, RenderBackend, SurfaceContext};
use crate::coords::Vec2;
use crate::core::SceneManager;
use crate::input::platform::winit::{to_screen, translate_key, translate_touch};
use crate::input::{InputHandle, Key, MotionKind, PointerId};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,

    /// Handed to the render backend when resources load.
    pub asset_root: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "tinsel".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            asset_root: PathBuf::from("assets"),
        }
    }
}

/// Entry point for the desktop host.
pub struct Runtime;

impl Runtime {
    /// Runs the event loop until the window closes or the back key goes
    /// unhandled. The manager is shut down before this returns.
    pub fn run<R, A>(config: RuntimeConfig, manager: SceneManager<R, A>) -> Result<()>
    where
        R: RenderBackend + 'static,
        A: AudioBackend + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut host = Host::new(config, manager);

        event_loop
            .run_app(&mut host)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

struct Host<R, A> {
    config: RuntimeConfig,
    manager: SceneManager<R, A>,
    input: InputHandle,

    window: Option<Arc<Window>>,

    cursor: Vec2,
    mouse_down: bool,
    key_repeats: HashMap<Key, u32>,

    exit_requested: bool,
}

impl<R, A> Host<R, A>
where
    R: RenderBackend,
    A: AudioBackend,
{
    fn new(config: RuntimeConfig, manager: SceneManager<R, A>) -> Self {
        let input = manager.input_handle();
        Self {
            config,
            manager,
            input,
            window: None,
            cursor: Vec2::ZERO,
            mouse_down: false,
            key_repeats: HashMap::new(),
            exit_requested: false,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let window = Arc::new(window);
        self.window = Some(Arc::clone(&window));
        Ok(window)
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        if !self.exit_requested {
            self.exit_requested = true;
            self.manager.shutdown();
            self.window = None;
        }
        event_loop.exit();
    }

    fn on_pointer(&mut self, button: MouseButton, state: ElementState) {
        if button != MouseButton::Left {
            return;
        }
        match state {
            ElementState::Pressed => {
                self.mouse_down = true;
                self.input.pointer_down(PointerId::MOUSE, self.cursor.x, self.cursor.y);
            }
            ElementState::Released if self.mouse_down => {
                self.mouse_down = false;
                self.input.pointer_up(PointerId::MOUSE, self.cursor.x, self.cursor.y);
            }
            ElementState::Released => {}
        }
    }

    fn on_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        let key = translate_key(event);

        match event.state {
            ElementState::Pressed => {
                let repeat = self.key_repeats.entry(key).or_insert(0);
                if event.repeat {
                    *repeat = repeat.saturating_add(1);
                } else {
                    *repeat = 0;
                }
                let repeat = *repeat;

                if !self.manager.on_key_down(key, repeat) && key == Key::Back {
                    log::info!("back key not handled by scene; exiting");
                    self.request_exit(event_loop);
                }
            }
            ElementState::Released => {
                self.key_repeats.remove(&key);
                self.manager.on_key_up(key);
            }
        }
    }
}

impl<R, A> ApplicationHandler for Host<R, A>
where
    R: RenderBackend + 'static,
    A: AudioBackend + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = match self.window.clone() {
            Some(window) => window,
            None => match self.create_window(event_loop) {
                Ok(window) => window,
                Err(e) => {
                    log::error!("failed to create window: {e:#}");
                    self.request_exit(event_loop);
                    return;
                }
            },
        };

        let size = window.inner_size();
        let surface = SurfaceContext::new(self.config.asset_root.clone()).with_window(Arc::clone(&window));

        self.manager.on_surface_created(surface);
        self.manager.on_surface_changed(size.width, size.height);
        self.manager.on_resume(&window);

        window.request_redraw();
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.manager.on_pause();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; scenes animate every frame.
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.request_exit(event_loop),

            WindowEvent::Resized(size) => {
                self.manager.on_surface_changed(size.width, size.height);
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    self.manager.on_surface_changed(size.width, size.height);
                }
            }

            WindowEvent::Focused(focus) => self.manager.on_focus_changed(focus),

            WindowEvent::Touch(touch) => {
                let (kind, pointer, pos) = translate_touch(&touch);
                match kind {
                    MotionKind::Down => self.input.pointer_down(pointer, pos.x, pos.y),
                    MotionKind::Move => self.input.pointer_move(pointer, pos.x, pos.y),
                    MotionKind::Up => self.input.pointer_up(pointer, pos.x, pos.y),
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = to_screen(position);
                if self.mouse_down {
                    self.input.pointer_move(PointerId::MOUSE, self.cursor.x, self.cursor.y);
                }
            }

            WindowEvent::CursorLeft { .. } => {
                // A drag leaving the window ends the gesture at its last position.
                if self.mouse_down {
                    self.mouse_down = false;
                    self.input.pointer_up(PointerId::MOUSE, self.cursor.x, self.cursor.y);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => self.on_pointer(button, state),

            WindowEvent::KeyboardInput { event, .. } => self.on_key(event_loop, &event),

            WindowEvent::RedrawRequested => self.manager.on_draw_frame(),

            _ => {}
        }
    }
}
