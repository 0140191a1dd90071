//! The viewer controller.
//!
//! [`CabinetViewer`] owns one [`ViewerState`], the [`CabinetScene`] it
//! drives and the [`InputProcessor`]. Hosts feed it input events and UI
//! commands, call [`tick`](CabinetViewer::tick) once per frame to fire
//! timers, and hand it a [`RenderBackend`] to draw.

mod accessors;
/// Command vocabulary.
pub mod command;
mod input;

use web_time::Instant;

use self::command::ViewerCommand;
use crate::input::InputProcessor;
use crate::options::Options;
use crate::renderer::{Frame, RenderBackend};
use crate::scene::{build_cabinet, CabinetScene};
use crate::view::ViewerState;

/// Viewport used until the host reports a real size.
const DEFAULT_VIEWPORT: (u32, u32) = (1280, 720);

/// Interactive cabinet viewer: input interpretation, view state, scene
/// sync and per-frame draw.
#[derive(Debug, Clone)]
pub struct CabinetViewer {
    state: ViewerState,
    scene: CabinetScene,
    input: InputProcessor,
    options: Options,
    viewport: (u32, u32),
}

impl Default for CabinetViewer {
    fn default() -> Self {
        Self::new(Options::default(), DEFAULT_VIEWPORT)
    }
}

impl CabinetViewer {
    /// Viewer showing the standard cabinet in a `width` x `height`
    /// viewport.
    #[must_use]
    pub fn new(options: Options, size: (u32, u32)) -> Self {
        Self::with_scene(build_cabinet(), options, size)
    }

    /// Viewer driving a caller-supplied scene. Parts the scene lacks are
    /// skipped by every layout operation.
    #[must_use]
    pub fn with_scene(
        scene: CabinetScene,
        options: Options,
        size: (u32, u32),
    ) -> Self {
        let size = if size.0 > 0 && size.1 > 0 {
            size
        } else {
            log::debug!(
                "degenerate viewport {}x{}; starting at {}x{}",
                size.0,
                size.1,
                DEFAULT_VIEWPORT.0,
                DEFAULT_VIEWPORT.1
            );
            DEFAULT_VIEWPORT
        };
        let (width, height) = size;
        let aspect = width as f32 / height as f32;
        let state = ViewerState::new(&options, aspect);
        let mut viewer = Self {
            state,
            scene,
            input: InputProcessor::new(),
            options,
            viewport: size,
        };
        viewer.state.sync_orientation(&mut viewer.scene);
        log::debug!(
            "viewer created: {} scene nodes, viewport {width}x{height}",
            viewer.scene.nodes().len()
        );
        viewer
    }

    /// Execute a command now.
    pub fn execute(&mut self, command: ViewerCommand) {
        self.execute_at(command, Instant::now());
    }

    /// Execute a command as if issued at `now`. Only timer-scheduling
    /// commands care about the instant.
    pub fn execute_at(&mut self, command: ViewerCommand, now: Instant) {
        log::trace!("execute {command:?}");
        match command {
            ViewerCommand::RotateBy { delta } => {
                self.state.rotate(delta);
                self.state.sync_orientation(&mut self.scene);
            }
            ViewerCommand::Zoom { factor } => self.state.rig.zoom(factor),
            ViewerCommand::ZoomIn => self.state.rig.zoom_in(),
            ViewerCommand::ZoomOut => self.state.rig.zoom_out(),
            ViewerCommand::ShowExploded => {
                self.state.show_exploded(&mut self.scene);
            }
            ViewerCommand::ShowAssembled => {
                self.state.show_assembled(&mut self.scene);
            }
            ViewerCommand::ShowDoors => {
                let _ = self.state.show_doors(&mut self.scene, now);
            }
            ViewerCommand::CancelDoorSlide => {
                let _ = self.state.cancel_door_slide();
            }
            ViewerCommand::ResetView => {
                self.state.reset_view();
                self.state.sync_orientation(&mut self.scene);
            }
        }
    }

    /// Pull the parts apart.
    pub fn show_exploded(&mut self) {
        self.execute(ViewerCommand::ShowExploded);
    }

    /// Put the parts back together.
    pub fn show_assembled(&mut self) {
        self.execute(ViewerCommand::ShowAssembled);
    }

    /// Slide the right door behind the left; it returns after the
    /// configured delay on a later [`tick`](Self::tick).
    pub fn show_doors(&mut self) {
        self.execute(ViewerCommand::ShowDoors);
    }

    /// Zero the orientation and return the camera home.
    pub fn reset_view(&mut self) {
        self.execute(ViewerCommand::ResetView);
    }

    /// One zoom step closer.
    pub fn zoom_in(&mut self) {
        self.execute(ViewerCommand::ZoomIn);
    }

    /// One zoom step farther.
    pub fn zoom_out(&mut self) {
        self.execute(ViewerCommand::ZoomOut);
    }

    /// Fire any timers due at `now`. Returns `true` if scene state
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.state.tick(&mut self.scene, now)
    }

    /// Fire timers due now.
    pub fn update(&mut self) -> bool {
        self.tick(Instant::now())
    }

    /// Track a viewport resize. A zero dimension keeps the previous
    /// projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.state.rig.resize(width, height) {
            self.viewport = (width, height);
        }
    }

    /// Issue one draw call. Runs every frame whether or not anything
    /// changed; [`Frame::dirty`] tells the backend if it may skip work.
    pub fn render(&mut self, backend: &mut dyn RenderBackend) {
        self.state.sync_orientation(&mut self.scene);
        let frame = Frame {
            scene: &self.scene,
            camera: &self.state.rig.camera,
            view_proj: self.state.rig.camera.build_matrix(),
            viewport: self.viewport,
            dirty: self.scene.is_dirty(),
        };
        backend.draw(&frame);
        self.scene.mark_rendered();
    }
}
