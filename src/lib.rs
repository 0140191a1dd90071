// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests lean on unwrap for brevity
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Interactive 3D cabinet viewer core.
//!
//! Vitrina turns mouse, touch, wheel and keyboard input into bounded
//! transforms on a cabinet model: drag to orbit the cabinet, scroll to zoom
//! the camera, and switch between assembled and exploded layouts or
//! demonstrate the sliding doors.
//!
//! # Key entry points
//!
//! - [`CabinetViewer`] - owns the view state and scene; the host surface
//!   (`show_exploded`, `show_assembled`, `show_doors`, `reset_view`,
//!   `zoom_in`, `zoom_out`)
//! - [`InputEvent`] / [`InputProcessor`] - device-agnostic input
//! - [`ViewerCommand`] - every operation the viewer can perform
//! - [`options::Options`] - TOML-configurable tunables
//! - [`renderer::RenderBackend`] - the per-frame draw seam
//!
//! # Architecture
//!
//! Everything runs on the host's event-loop thread. Input events are
//! interpreted synchronously into commands; the only deferred work is the
//! door-return timer, which fires from [`CabinetViewer::tick`]. The render
//! backend is called once per tick with a borrowed snapshot of the scene
//! and camera.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
pub mod view;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::command::ViewerCommand;
pub use engine::CabinetViewer;
pub use error::ViewerError;
pub use input::{EventResponse, InputEvent, InputProcessor, KeyAction};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
