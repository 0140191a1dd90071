//! Input handling: event types, the shared gesture session, and the input
//! processor that converts raw device events into viewer commands.

/// Platform-agnostic input events.
pub mod event;
/// Single drag session shared by mouse and touch.
pub mod gesture;
/// Bindable keyboard actions.
pub mod keyboard;
/// Converts raw events into viewer commands.
pub mod processor;

pub use event::{InputEvent, InputSource};
pub use gesture::GestureTracker;
pub use keyboard::KeyAction;
pub use processor::{EventResponse, InputProcessor};
