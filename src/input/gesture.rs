//! The single drag session shared by the pointer and touch families.
//!
//! At most one session is active at a time. Starting a session from one
//! family replaces any session the other family left behind; moves and
//! ends are only honoured for the family that owns the session.

use glam::Vec2;

use super::event::InputSource;

/// An in-progress drag: who started it and where it was last seen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    /// Device family that owns the session.
    pub source: InputSource,
    /// Last accepted position in screen pixels.
    pub last: Vec2,
}

/// Tracks the active drag session and turns successive positions into
/// pixel deltas.
#[derive(Debug, Default, Clone)]
pub struct GestureTracker {
    session: Option<GestureSession>,
}

impl GestureTracker {
    /// Create a tracker with no active session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a session at `point`.
    pub fn begin(&mut self, source: InputSource, point: Vec2) {
        if let Some(previous) = self.session {
            if previous.source != source {
                log::trace!(
                    "{source:?} session replaces {:?} session",
                    previous.source
                );
            }
        }
        self.session = Some(GestureSession {
            source,
            last: point,
        });
    }

    /// Feed a new position. Returns the delta since the last position when
    /// a session owned by `source` is active, `None` otherwise.
    pub fn track(&mut self, source: InputSource, point: Vec2) -> Option<Vec2> {
        let session = self.session.as_mut()?;
        if session.source != source {
            return None;
        }
        let delta = point - session.last;
        session.last = point;
        Some(delta)
    }

    /// End the session if `source` owns it.
    pub fn end(&mut self, source: InputSource) {
        if self.session.is_some_and(|s| s.source == source) {
            self.session = None;
        }
    }

    /// Whether any session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<GestureSession> {
        self.session
    }
}
