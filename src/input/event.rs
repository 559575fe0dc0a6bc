use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Everything a session reacts to besides the frame clock.
///
/// Tracking sources and UI layers push these into an [`EventQueue`]; the
/// session drains the queue at the start of each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEvent {
    /// The tracking source reports the target newly in view.
    TargetVisible,
    /// The tracking source reports the target left view.
    TargetLost,
    /// The user activated the trigger control.
    Trigger,
    /// Abort the running door cycle. Tracking state is kept.
    Reset,
}

/// Receives tracking-source visibility transitions.
///
/// Implemented by the coordinator so tracking integrations can be written
/// against this trait and tested with synthetic events.
pub trait TrackingObserver {
    /// The target came into view.
    fn on_target_visible(&mut self);
    /// The target left view.
    fn on_target_lost(&mut self);
}

/// FIFO buffer of pending [`SessionEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: VecDeque<SessionEvent>,
}

impl EventQueue {
    /// Empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: SessionEvent) {
        self.pending.push_back(event);
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = SessionEvent> + '_ {
        self.pending.drain(..)
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no events are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// A queue is itself a tracking observer: it records transitions for the
/// next frame instead of applying them immediately.
impl TrackingObserver for EventQueue {
    fn on_target_visible(&mut self) {
        self.push(SessionEvent::TargetVisible);
    }

    fn on_target_lost(&mut self) {
        self.push(SessionEvent::TargetLost);
    }
}
