#![deny(clippy::all)]
#![forbid(unsafe_code)]

use agent_field::{AmbientField, RasterCanvas, WindowMetrics};
use error_iter::ErrorIter as _;
use log::{debug, error, info, warn};
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, KeyEvent, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowId};

const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(1);
const BACKGROUND_COLOR: Color = Color {
    r: 0x0f as f64 / 255.0,
    g: 0x0f as f64 / 255.0,
    b: 0x12 as f64 / 255.0,
    a: 1.0,
};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("event loop failed")]
    EventLoop(#[from] EventLoopError),
    #[error("could not create window")]
    Window(#[from] OsError),
    #[error("could not create pixel surface")]
    Pixels(#[from] pixels::Error),
}

/// Run the field in a borderless fullscreen window, stepping it every
/// `frame_interval` and redrawing after each step.
pub fn animate<F>(frame_interval: Duration, build_field: F) -> Result<(), DriverError>
where
    F: Fn(WindowMetrics) -> AmbientField<RasterCanvas>,
{
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let frame_interval = frame_interval.max(MIN_FRAME_INTERVAL);
    event_loop.run_app(&mut AppEventHandler::new(frame_interval, build_field))?;
    Ok(())
}

pub fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}

struct App {
    field: AmbientField<RasterCanvas>,
    window: Arc<Window>,
    pixels: Pixels<'static>,
    frame_interval: Duration,
    next_update: Instant,
}

impl App {
    fn new<F>(
        event_loop: &ActiveEventLoop,
        build_field: &F,
        frame_interval: Duration,
    ) -> Result<Self, DriverError>
    where
        F: Fn(WindowMetrics) -> AmbientField<RasterCanvas>,
    {
        let window = Arc::new(Self::build_window(event_loop)?);
        let field = build_field(Self::window_metrics(&window));
        let (width, height) = field.viewport().backing_size();
        let pixels = Self::build_pixels(&window, width, height)?;
        info!("Window {:?}, buffer {}x{}", window.inner_size(), width, height);
        Ok(Self {
            field,
            window,
            pixels,
            frame_interval,
            next_update: Instant::now(),
        })
    }

    fn build_window(event_loop: &ActiveEventLoop) -> Result<Window, OsError> {
        let window_attributes = Window::default_attributes()
            .with_title("Ambient Field")
            .with_fullscreen(Some(Fullscreen::Borderless(None)))
            .with_visible(false);
        event_loop.create_window(window_attributes)
    }

    fn build_pixels(
        window: &Arc<Window>,
        width: u32,
        height: u32,
    ) -> Result<Pixels<'static>, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        PixelsBuilder::new(width.max(1), height.max(1), surface_texture)
            .clear_color(BACKGROUND_COLOR)
            .build()
    }

    fn window_metrics(window: &Window) -> WindowMetrics {
        let size = window.inner_size();
        WindowMetrics::from_physical(size.width, size.height, window.scale_factor())
    }

    fn on_create(&mut self) {
        self.window.request_redraw();
        self.window.set_visible(true);
    }

    fn on_time_step(&mut self) {
        self.field.update();
        self.window.request_redraw();

        while self.next_update < Instant::now() {
            self.next_update += self.frame_interval;
        }
    }

    fn on_redraw(&mut self) -> Result<(), pixels::Error> {
        self.field.clear();
        self.field.render();

        copy_frame(self.field.canvas().frame(), self.pixels.frame_mut());
        self.pixels.render()
    }

    fn on_resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            debug!("Ignoring resize to {}x{}", size.width, size.height);
            return;
        }

        self.field.on_resize(Self::window_metrics(&self.window));
        if let Err(err) = self.pixels.resize_surface(size.width, size.height) {
            log_error("pixels.resize_surface", err);
        }
        let (width, height) = self.field.viewport().backing_size();
        if let Err(err) = self.pixels.resize_buffer(width.max(1), height.max(1)) {
            log_error("pixels.resize_buffer", err);
        }
        self.window.request_redraw();
    }
}

#[derive(Debug, PartialEq)]
enum FrameCopy {
    Copied,
    EmptyRaster,
    SizeMismatch,
}

// A zero-area window leaves the raster empty while the surface keeps a 1x1
// buffer; that is expected until the next non-zero resize.
fn copy_frame(raster: &[u8], screen: &mut [u8]) -> FrameCopy {
    if raster.is_empty() {
        debug!("Raster is empty, leaving surface as is");
        FrameCopy::EmptyRaster
    } else if screen.len() != raster.len() {
        warn!(
            "Skipping frame copy: surface has {} bytes, raster has {}",
            screen.len(),
            raster.len()
        );
        FrameCopy::SizeMismatch
    } else {
        screen.copy_from_slice(raster);
        FrameCopy::Copied
    }
}

struct AppEventHandler<F>
where
    F: Fn(WindowMetrics) -> AmbientField<RasterCanvas>,
{
    build_field: F,
    frame_interval: Duration,
    app: Option<App>,
}

impl<F> AppEventHandler<F>
where
    F: Fn(WindowMetrics) -> AmbientField<RasterCanvas>,
{
    fn new(frame_interval: Duration, build_field: F) -> Self {
        Self {
            build_field,
            frame_interval,
            app: None,
        }
    }
}

impl<F> ApplicationHandler for AppEventHandler<F>
where
    F: Fn(WindowMetrics) -> AmbientField<RasterCanvas>,
{
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause
            && let Some(app) = self.app.as_mut()
        {
            app.on_time_step();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }
        match App::new(event_loop, &self.build_field, self.frame_interval) {
            Ok(mut app) => {
                app.on_create();
                self.app = Some(app);
            }
            Err(err) => {
                log_error("App::new", err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Released,
                        repeat: false,
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape | KeyCode::KeyQ | KeyCode::KeyX => {
                    event_loop.exit();
                }
                _ => (),
            },
            WindowEvent::Resized(size) => {
                app.on_resize(size);
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = app.window.inner_size();
                app.on_resize(size);
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = app.on_redraw() {
                    log_error("pixels.render", err);
                    event_loop.exit();
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(app) = self.app.as_ref() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(app.next_update));
        }
    }
}
