//! Standalone viewer window backed by winit.
//!
//! Translates native mouse, touch, wheel and keyboard events into
//! [`InputEvent`]s and key strings, ticks the viewer every frame and hands
//! it to the configured [`RenderBackend`].
//!
//! ```no_run
//! # use vitrina::Viewer;
//! Viewer::builder()
//!     .with_title("Cabinet")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{
        ElementState, MouseButton, MouseScrollDelta, Touch, TouchPhase,
        WindowEvent,
    },
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{CursorIcon, Window, WindowId},
};

use crate::{
    error::ViewerError,
    options::Options,
    renderer::{LogRenderer, RenderBackend},
    CabinetViewer, InputEvent,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
    backend: Option<Box<dyn RenderBackend>>,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Vitrina", default
    /// options, logging backend).
    fn new() -> Self {
        Self {
            options: None,
            title: "Vitrina".into(),
            backend: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Draw through `backend` instead of the logging backend.
    #[must_use]
    pub fn with_backend(mut self, backend: impl RenderBackend + 'static) -> Self {
        self.backend = Some(Box::new(backend));
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            title: self.title,
            backend: self
                .backend
                .unwrap_or_else(|| Box::new(LogRenderer::new())),
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the cabinet.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Option<Options>,
    title: String,
    backend: Box<dyn RenderBackend>,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), ViewerError> {
        let event_loop =
            EventLoop::new().map_err(|e| ViewerError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            viewer: None,
            options: self.options,
            title: self.title,
            backend: self.backend,
            cursor: PhysicalPosition::new(0.0, 0.0),
            touches: Vec::new(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| ViewerError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    viewer: Option<CabinetViewer>,
    options: Option<Options>,
    title: String,
    backend: Box<dyn RenderBackend>,
    /// Last cursor position; winit button events carry none.
    cursor: PhysicalPosition<f64>,
    /// Active touch points in the order they went down.
    touches: Vec<(u64, PhysicalPosition<f64>)>,
}

impl ViewerApp {
    fn forward(&mut self, event: InputEvent) {
        let Some(viewer) = &mut self.viewer else {
            return;
        };
        let _ = viewer.handle_input(event);
        if let Some(window) = &self.window {
            window.set_cursor(if viewer.is_dragging() {
                CursorIcon::Grabbing
            } else {
                CursorIcon::Grab
            });
        }
    }

    /// Map a winit touch onto the first-touch-wins DOM-style model.
    fn touch_event(&mut self, touch: Touch) -> InputEvent {
        match touch.phase {
            TouchPhase::Started => {
                self.touches.push((touch.id, touch.location));
            }
            TouchPhase::Moved => {
                if let Some(entry) =
                    self.touches.iter_mut().find(|(id, _)| *id == touch.id)
                {
                    entry.1 = touch.location;
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touches.retain(|(id, _)| *id != touch.id);
                return InputEvent::TouchEnd;
            }
        }
        let (x, y) = self
            .touches
            .first()
            .map_or((0.0, 0.0), |(_, p)| (p.x as f32, p.y as f32));
        let touches = self.touches.len();
        if touch.phase == TouchPhase::Started {
            InputEvent::TouchStart { touches, x, y }
        } else {
            InputEvent::TouchMove { touches, x, y }
        }
    }
}

/// Viewport size for a window's inner size.
fn viewport_size(inner: PhysicalSize<u32>) -> (u32, u32) {
    (inner.width, inner.height)
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes().with_title(self.title.clone());
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        window.set_cursor(CursorIcon::Grab);

        let options = self.options.take().unwrap_or_default();
        let viewer =
            CabinetViewer::new(options, viewport_size(window.inner_size()));

        window.request_redraw();
        self.window = Some(window);
        self.viewer = Some(viewer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and viewer must be initialised.
        if self.window.is_none() || self.viewer.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                let (width, height) = viewport_size(size);
                if let Some(viewer) = &mut self.viewer {
                    viewer.resize(width, height);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(viewer) = &mut self.viewer {
                    let _ = viewer.update();
                    viewer.render(self.backend.as_mut());
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                let event = match state {
                    ElementState::Pressed => InputEvent::PointerDown {
                        x: self.cursor.x as f32,
                        y: self.cursor.y as f32,
                    },
                    ElementState::Released => InputEvent::PointerUp,
                };
                self.forward(event);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = position;
                self.forward(InputEvent::PointerMove {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::CursorLeft { .. } => {
                self.forward(InputEvent::PointerLeave);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                // winit reports scroll-up as positive; the DOM convention
                // the input layer follows is the opposite.
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y,
                    MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
                };
                self.forward(InputEvent::Wheel { delta_y });
            }

            WindowEvent::Touch(touch) => {
                let event = self.touch_event(touch);
                self.forward(event);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key_str = format!("{code:?}");
                if let Some(viewer) = &mut self.viewer {
                    if !viewer.handle_key_press(&key_str) {
                        log::trace!("unbound key {key_str}");
                    }
                }
            }

            _ => (),
        }
    }
}
