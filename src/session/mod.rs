//! One AR session: pending events, the coordinator, and the options it was
//! built from.
//!
//! A host drives the session once per rendered frame:
//!
//! ```ignore
//! // tracking callbacks and UI handlers, any time during the frame:
//! session.events_mut().on_target_visible();
//! session.push_event(SessionEvent::Trigger);
//!
//! // once per frame, before rendering:
//! session.frame(clock.tick());
//! let [left, right] = session.door_transforms();
//! ```

pub mod scenario;

use std::time::Duration;

use glam::Mat4;
use serde::Serialize;

pub use scenario::{Scenario, ScenarioReport, ScriptedEvent, TransitionRecord};

use crate::coordinator::{
    AnimationState, Presentation, PresentationSink, TrackingState,
    VisibilityCoordinator,
};
use crate::input::{EventQueue, KeyAction, SessionEvent};
use crate::options::Options;
use crate::scene::{DoorInstance, HingePair};

/// Coordinator-derived state at one point in a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// Frames run so far.
    pub frame: u64,
    /// Tracking state.
    pub tracking: TrackingState,
    /// Door cycle state.
    pub animation: AnimationState,
    /// Door progress.
    pub door_progress: f32,
    /// Whether the door group is shown.
    pub doors_visible: bool,
    /// Whether the trigger control is enabled.
    pub trigger_enabled: bool,
}

/// Owns everything that lives for the length of one AR session.
#[derive(Debug)]
pub struct Session<S = Presentation> {
    coordinator: VisibilityCoordinator<S>,
    events: EventQueue,
    options: Options,
    hinges: HingePair,
    frame: u64,
    elapsed: Duration,
}

impl<S: PresentationSink> Session<S> {
    /// Session in `{Unseen, Idle}` presenting to `sink`.
    pub fn new(options: Options, sink: S) -> Self {
        let coordinator = VisibilityCoordinator::new(
            &options.animation,
            options.session.lost_target,
            sink,
        );
        log::info!(
            "session started (open {} ms, hold {} ms, close {} ms, {:?} on \
             target loss)",
            options.animation.open_duration_ms,
            options.animation.hold_ms,
            options.animation.close_duration_ms,
            options.session.lost_target,
        );
        Self {
            coordinator,
            events: EventQueue::new(),
            hinges: HingePair::new(&options.doors),
            options,
            frame: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Options the session was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The coordinator.
    #[must_use]
    pub fn coordinator(&self) -> &VisibilityCoordinator<S> {
        &self.coordinator
    }

    /// Hinge geometry of the door group.
    #[must_use]
    pub fn hinges(&self) -> &HingePair {
        &self.hinges
    }

    /// Pending event queue. Doubles as the tracking observer a tracking
    /// integration reports into.
    pub fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Queue an event for the next frame.
    pub fn push_event(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    /// Queue the event bound to `key`, if any. Returns the bound action.
    pub fn handle_key(&mut self, key: &str) -> Option<KeyAction> {
        let action = self.options.keybindings.lookup(key)?;
        self.push_event(action.to_event());
        Some(action)
    }

    /// Run one frame: apply pending events in order, then advance
    /// animation time by `dt`.
    pub fn frame(&mut self, dt: Duration) {
        let events: Vec<SessionEvent> = self.events.drain().collect();
        for event in events {
            self.apply(event);
        }
        self.coordinator.tick(dt);
        self.frame += 1;
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn apply(&mut self, event: SessionEvent) {
        log::trace!("frame {}: {event:?}", self.frame);
        match event {
            SessionEvent::TargetVisible => self.coordinator.on_target_visible(),
            SessionEvent::TargetLost => self.coordinator.on_target_lost(),
            SessionEvent::Trigger => self.coordinator.on_trigger(),
            SessionEvent::Reset => self.coordinator.reset(),
        }
    }

    /// Frames run so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Frame time advanced so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Leaf model matrices for the current progress.
    #[must_use]
    pub fn door_transforms(&self) -> [Mat4; 2] {
        self.hinges.transforms(self.coordinator.door_progress())
    }

    /// Leaf instance data for the current progress.
    #[must_use]
    pub fn door_instances(&self) -> [DoorInstance; 2] {
        self.hinges.instances(self.coordinator.door_progress())
    }

    /// Current coordinator-derived state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            frame: self.frame,
            tracking: self.coordinator.tracking_state(),
            animation: self.coordinator.animation_state(),
            door_progress: self.coordinator.door_progress(),
            doors_visible: self.coordinator.doors_visible(),
            trigger_enabled: self.coordinator.trigger_available(),
        }
    }
}

impl Session<Presentation> {
    /// Session presenting into a plain [`Presentation`] snapshot.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self::new(options, Presentation::default())
    }

    /// Latest presentation state.
    #[must_use]
    pub fn presentation(&self) -> &Presentation {
        self.coordinator.sink()
    }
}
