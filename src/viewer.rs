//! Windowed viewer: the external frame driver for the field.
//!
//! The core engine only knows "step, then draw, once per logical frame".
//! This module supplies that cadence from a winit event loop: cursor events
//! update the [`PointerState`], resize events reinitialize the field, and
//! every redraw steps the simulation and renders it through the wgpu backend.
//!
//! # Example
//!
//! ```ignore
//! use plexus::Viewer;
//!
//! Viewer::new()
//!     .with_title("ambient field")
//!     .with_size(1280, 720)
//!     .run()?;
//! ```

use std::sync::Arc;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::ViewerError;
use crate::field::{Field, MAX_PARTICLES};
use crate::gpu::GpuState;
use crate::pointer::PointerState;
use crate::render::Renderer;
use crate::time::Time;

/// Default accent color, rgb(0, 212, 255).
pub const DEFAULT_ACCENT: [f32; 3] = [0.0, 212.0 / 255.0, 1.0];

/// A particle field viewer builder.
///
/// Use method chaining to configure, then call `.run()` to start.
pub struct Viewer {
    title: String,
    size: (u32, u32),
    seed: Option<u64>,
    cap: usize,
    accent: [f32; 3],
    renderer: Renderer,
}

impl Viewer {
    /// Create a viewer with default settings.
    pub fn new() -> Self {
        Self {
            title: "plexus".to_string(),
            size: (1280, 720),
            seed: None,
            cap: MAX_PARTICLES,
            accent: DEFAULT_ACCENT,
            renderer: Renderer::new(),
        }
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Fix the RNG seed for a reproducible particle population.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the population cap.
    ///
    /// The connection pass is O(n^2) in this cap; raising it past a few
    /// hundred makes every frame noticeably more expensive.
    pub fn with_max_particles(mut self, cap: usize) -> Self {
        self.cap = cap;
        self
    }

    /// Set the accent color used for dots and connection lines (RGB, 0-1).
    pub fn with_accent(mut self, accent: [f32; 3]) -> Self {
        self.accent = accent;
        self
    }

    /// Set the connection distance threshold in pixels.
    pub fn with_connection_radius(mut self, radius: f32) -> Self {
        self.renderer = self.renderer.with_connection_radius(radius);
        self
    }

    /// Run the viewer. Blocks until the window is closed.
    pub fn run(self) -> Result<(), ViewerError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    settings: Viewer,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    field: Option<Field>,
    pointer: PointerState,
    time: Time,
    error: Option<ViewerError>,
}

impl App {
    fn new(settings: Viewer) -> Self {
        Self {
            settings,
            window: None,
            gpu: None,
            field: None,
            pointer: PointerState::centered(0.0, 0.0),
            time: Time::new(),
            error: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ViewerError> {
        let (width, height) = self.settings.size;
        let window_attrs = Window::default_attributes()
            .with_title(&self.settings.title)
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu = pollster::block_on(GpuState::new(
            window.clone(),
            self.settings.accent,
            self.settings.cap,
        ))?;

        let size = window.inner_size();
        let (w, h) = (size.width as f32, size.height as f32);
        let field = match self.settings.seed {
            Some(seed) => Field::with_seed(w, h, seed),
            None => Field::new(w, h),
        }
        .with_cap(self.settings.cap);

        self.pointer = PointerState::centered(w, h);
        self.field = Some(field);
        self.gpu = Some(gpu);
        self.window = Some(window);
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                // Resize discards the whole population, by design.
                if let Some(field) = &mut self.field {
                    field.resize(physical_size.width as f32, physical_size.height as f32);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer
                    .set(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::RedrawRequested => {
                if let (Some(gpu), Some(field)) = (&mut self.gpu, &mut self.field) {
                    field.step(self.pointer.get());

                    match gpu.render(field, &self.settings.renderer) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            gpu.resize(winit::dpi::PhysicalSize {
                                width: gpu.config.width,
                                height: gpu.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }

                    if self.time.tick() {
                        if let Some(window) = &self.window {
                            window.set_title(&format!(
                                "{} | {} particles | {:.0} fps",
                                self.settings.title,
                                field.len(),
                                self.time.fps()
                            ));
                        }
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
