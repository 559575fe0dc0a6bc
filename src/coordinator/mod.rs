//! The visibility-gated door state machine.
//!
//! [`VisibilityCoordinator`] owns the tracking state, the door cycle state,
//! the door animation and the tween runner that drives it. It is the only
//! writer of all four, and it pushes every presentation decision through a
//! [`PresentationSink`].
//!
//! ```text
//! Idle --trigger (Seen)--> Opening --progress = 1--> HoldOpen
//!   ^                                                   |
//!   +------progress = 0------ Closing <--hold elapsed---+
//! ```
//!
//! Target loss hides the doors and disables the trigger. Under the default
//! [`LostTargetPolicy::Continue`] it does not touch the cycle: tweens and
//! the hold timer keep running against the hidden doors and the cycle
//! returns to `Idle` on its own.

mod sink;
mod state;

use std::time::Duration;

pub use sink::{Presentation, PresentationChange, PresentationSink};
pub use state::{AnimationState, TrackingState};

use crate::animation::{
    DoorAnimation, DoorEvent, Swing, TaskId, TickEvent, TweenRunner,
};
use crate::input::TrackingObserver;
use crate::options::{AnimationOptions, LostTargetPolicy};

/// Deferred work queued on the coordinator's tween runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredAction {
    /// End the hold and start the close swing.
    BeginClose,
}

/// Decides when the door cycle may run and keeps presentation consistent
/// with tracking and animation state.
///
/// Constructed once per AR session in `{Unseen, Idle}`.
#[derive(Debug)]
pub struct VisibilityCoordinator<S> {
    tracking: TrackingState,
    animation: AnimationState,
    doors: DoorAnimation,
    runner: TweenRunner<DeferredAction>,
    hold: Duration,
    lost_target: LostTargetPolicy,
    /// The queued hold → close task, while in `HoldOpen`.
    pending_close: Option<TaskId>,
    sink: S,
}

impl<S: PresentationSink> VisibilityCoordinator<S> {
    /// New coordinator in `{Unseen, Idle}`; the initial presentation
    /// (hidden doors, disabled trigger, closed doors) is pushed to `sink`.
    pub fn new(
        animation: &AnimationOptions,
        lost_target: LostTargetPolicy,
        sink: S,
    ) -> Self {
        let mut coordinator = Self {
            tracking: TrackingState::Unseen,
            animation: AnimationState::Idle,
            doors: DoorAnimation::new(animation),
            runner: TweenRunner::new(),
            hold: animation.hold(),
            lost_target,
            pending_close: None,
            sink,
        };
        coordinator.present_all();
        coordinator
    }

    /// Current tracking state.
    #[must_use]
    pub fn tracking_state(&self) -> TrackingState {
        self.tracking
    }

    /// Current phase of the door cycle.
    #[must_use]
    pub fn animation_state(&self) -> AnimationState {
        self.animation
    }

    /// Current door progress (0 = closed, 1 = open).
    #[must_use]
    pub fn door_progress(&self) -> f32 {
        self.doors.progress()
    }

    /// Linear time fraction of the swing in flight, if any.
    #[must_use]
    pub fn swing_phase(&self) -> Option<f32> {
        self.doors.swing_phase(&self.runner)
    }

    /// Whether the trigger control should be enabled: target seen and no
    /// cycle running.
    #[must_use]
    pub fn trigger_available(&self) -> bool {
        self.tracking.is_seen() && self.animation.is_idle()
    }

    /// Whether the door group should be visible.
    #[must_use]
    pub fn doors_visible(&self) -> bool {
        self.tracking.is_seen()
    }

    /// Policy applied when the target is lost mid-cycle.
    #[must_use]
    pub fn lost_target_policy(&self) -> LostTargetPolicy {
        self.lost_target
    }

    /// The presentation sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the presentation sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the coordinator, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// The tracking source reports the target newly in view.
    ///
    /// Shows the doors and, if no cycle is running, enables the trigger.
    /// Repeating the call re-affirms the same presentation.
    pub fn on_target_visible(&mut self) {
        if !self.tracking.is_seen() {
            log::debug!("target visible ({:?})", self.animation);
        }
        self.tracking = TrackingState::Seen;
        self.sink.set_doors_visible(true);
        if self.animation.is_idle() {
            self.sink.set_trigger_enabled(true);
        }
    }

    /// The tracking source reports the target left view.
    ///
    /// Hides the doors and disables the trigger. A running cycle continues
    /// unless the policy is [`LostTargetPolicy::Reset`].
    pub fn on_target_lost(&mut self) {
        if self.tracking.is_seen() {
            log::debug!("target lost ({:?})", self.animation);
        }
        self.tracking = TrackingState::Unseen;
        self.sink.set_doors_visible(false);
        self.sink.set_trigger_enabled(false);

        if self.lost_target == LostTargetPolicy::Reset
            && !self.animation.is_idle()
        {
            self.abort_cycle();
        }
    }

    /// The user activated the trigger.
    ///
    /// Starts the open swing when the target is seen and no cycle is
    /// running; otherwise does nothing.
    pub fn on_trigger(&mut self) {
        if !self.tracking.is_seen() {
            log::trace!("trigger ignored: target not seen");
            return;
        }
        if !self.animation.is_idle() {
            log::trace!("trigger ignored: cycle in {:?}", self.animation);
            return;
        }

        self.transition(AnimationState::Opening);
        self.sink.set_trigger_enabled(false);
        self.doors.open(&mut self.runner);
    }

    /// Abort any running cycle and return the doors to rest.
    ///
    /// Tracking state is left alone; only the tracking source writes it.
    pub fn reset(&mut self) {
        self.abort_cycle();
        self.present_all();
    }

    /// Advance animation time by one frame.
    ///
    /// Moves the door swing, forwards progress to the sink and runs the
    /// completion hooks and hold timer.
    pub fn tick(&mut self, dt: Duration) {
        for event in self.runner.advance(dt) {
            if let TickEvent::Fired {
                id,
                task: DeferredAction::BeginClose,
            } = event
            {
                self.begin_close(id);
                continue;
            }

            match self.doors.apply(&event) {
                Some(DoorEvent::Moved(progress)) => {
                    self.sink.set_door_progress(progress);
                }
                Some(DoorEvent::Settled { swing, progress }) => {
                    self.sink.set_door_progress(progress);
                    self.finish_swing(swing);
                }
                None => {}
            }
        }
    }

    fn transition(&mut self, next: AnimationState) {
        log::debug!("door cycle {:?} -> {:?}", self.animation, next);
        self.animation = next;
    }

    fn finish_swing(&mut self, swing: Swing) {
        match (swing, self.animation) {
            (Swing::Open, AnimationState::Opening) => {
                self.transition(AnimationState::HoldOpen);
                self.pending_close = Some(
                    self.runner.schedule(self.hold, DeferredAction::BeginClose),
                );
            }
            (Swing::Close, AnimationState::Closing) => {
                self.transition(AnimationState::Idle);
                if self.tracking.is_seen() {
                    self.sink.set_trigger_enabled(true);
                }
            }
            (swing, state) => {
                log::warn!("{swing:?} swing settled during {state:?}");
            }
        }
    }

    fn begin_close(&mut self, id: TaskId) {
        if self.pending_close != Some(id) {
            return;
        }
        self.pending_close = None;
        if self.animation != AnimationState::HoldOpen {
            return;
        }
        self.transition(AnimationState::Closing);
        self.doors.close(&mut self.runner);
    }

    fn abort_cycle(&mut self) {
        if !self.animation.is_idle() {
            log::debug!("door cycle aborted in {:?}", self.animation);
        }
        self.doors.reset(&mut self.runner);
        if let Some(id) = self.pending_close.take() {
            let _ = self.runner.cancel_task(id);
        }
        self.animation = AnimationState::Idle;
        self.sink.set_door_progress(self.doors.progress());
    }

    fn present_all(&mut self) {
        let visible = self.doors_visible();
        let trigger = self.trigger_available();
        let progress = self.doors.progress();
        self.sink.set_doors_visible(visible);
        self.sink.set_trigger_enabled(trigger);
        self.sink.set_door_progress(progress);
    }
}

impl<S: PresentationSink> TrackingObserver for VisibilityCoordinator<S> {
    fn on_target_visible(&mut self) {
        VisibilityCoordinator::on_target_visible(self);
    }

    fn on_target_lost(&mut self) {
        VisibilityCoordinator::on_target_lost(self);
    }
}
