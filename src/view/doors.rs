//! Sliding-door demonstration timer.
//!
//! "Show doors" slides the right door behind the left one, holds it there
//! for a fixed delay, then returns it to rest. The pending return is an
//! explicit deadline owned by [`DoorSlider`], so it can be replaced or
//! cancelled instead of firing blindly.

use web_time::{Duration, Instant};

use crate::options::DoorOptions;

/// Observable state of the sliding door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorSlide {
    /// Right door at its resting offset, nothing pending.
    #[default]
    Closed,
    /// Right door slid behind the left one; it returns at `deadline`.
    Sliding {
        /// When the door goes back to rest.
        deadline: Instant,
    },
}

/// Owns the door-return deadline and the two offsets it alternates
/// between.
#[derive(Debug, Clone)]
pub struct DoorSlider {
    state: DoorSlide,
    delay: Duration,
    slide_offset: f32,
    open_offset: f32,
}

impl DoorSlider {
    /// Create an idle slider.
    #[must_use]
    pub fn new(options: &DoorOptions) -> Self {
        Self {
            state: DoorSlide::Closed,
            delay: Duration::from_millis(options.slide_delay_ms),
            slide_offset: options.slide_offset,
            open_offset: options.open_offset,
        }
    }

    /// Re-read delay and offsets. A pending deadline keeps its original
    /// schedule.
    pub fn apply_options(&mut self, options: &DoorOptions) {
        self.delay = Duration::from_millis(options.slide_delay_ms);
        self.slide_offset = options.slide_offset;
        self.open_offset = options.open_offset;
    }

    /// Begin a slide at `now` and return the x offset to write to the
    /// right door. A pending return is replaced, so the hold restarts.
    pub fn start(&mut self, now: Instant) -> f32 {
        if let DoorSlide::Sliding { deadline } = self.state {
            log::debug!(
                "door slide re-triggered {:?} before its return",
                deadline.saturating_duration_since(now)
            );
        }
        self.state = DoorSlide::Sliding {
            deadline: now + self.delay,
        };
        self.slide_offset
    }

    /// Fire the pending return if its deadline has passed. Returns the x
    /// offset to write, exactly once per slide.
    pub fn poll(&mut self, now: Instant) -> Option<f32> {
        match self.state {
            DoorSlide::Sliding { deadline } if now >= deadline => {
                self.state = DoorSlide::Closed;
                Some(self.open_offset)
            }
            _ => None,
        }
    }

    /// Drop the pending return, leaving the door where it is. Returns
    /// whether anything was pending.
    pub fn cancel(&mut self) -> bool {
        let pending = matches!(self.state, DoorSlide::Sliding { .. });
        self.state = DoorSlide::Closed;
        pending
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> DoorSlide {
        self.state
    }

    /// Offset the right door returns to.
    #[must_use]
    pub fn open_offset(&self) -> f32 {
        self.open_offset
    }
}
