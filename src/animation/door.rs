//! The door swing: two symmetric tweens sharing one progress value.

use std::time::Duration;

use super::runner::{TickEvent, TweenId, TweenRunner};
use super::tween::Tween;
use crate::options::AnimationOptions;
use crate::util::easing::EasingFunction;

/// Direction of a door swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swing {
    /// Progress moving toward 1 (fully open).
    Open,
    /// Progress moving toward 0 (closed).
    Close,
}

impl Swing {
    /// Progress value this swing ends at.
    #[must_use]
    pub fn target(self) -> f32 {
        match self {
            Self::Open => 1.0,
            Self::Close => 0.0,
        }
    }
}

/// What a tick event meant for the doors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DoorEvent {
    /// Progress moved this frame.
    Moved(f32),
    /// A swing reached its end value.
    Settled {
        /// Swing that finished.
        swing: Swing,
        /// Final progress (exactly [`Swing::target`]).
        progress: f32,
    },
}

/// Owns the door progress and the tween currently driving it.
///
/// Progress is 0.0 when closed and 1.0 when fully open. It only changes
/// when [`apply`](Self::apply) is fed an event for the active tween, so
/// the tween runner stays the sole source of motion.
#[derive(Debug, Clone)]
pub struct DoorAnimation {
    progress: f32,
    active: Option<(Swing, TweenId)>,
    open_duration: Duration,
    close_duration: Duration,
    easing: EasingFunction,
}

impl DoorAnimation {
    /// Closed doors using the durations and easing from `options`.
    #[must_use]
    pub fn new(options: &AnimationOptions) -> Self {
        Self {
            progress: 0.0,
            active: None,
            open_duration: options.open_duration(),
            close_duration: options.close_duration(),
            easing: options.easing,
        }
    }

    /// Current progress (0 = closed, 1 = open).
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// The swing in flight, if any.
    #[must_use]
    pub fn active(&self) -> Option<Swing> {
        self.active.map(|(swing, _)| swing)
    }

    /// Linear time fraction of the swing in flight.
    ///
    /// Unlike [`progress`](Self::progress) this never runs backwards within
    /// a swing, whatever the easing.
    #[must_use]
    pub fn swing_phase<T>(&self, runner: &TweenRunner<T>) -> Option<f32> {
        let (_, id) = self.active?;
        runner.tween(id).map(Tween::linear_t)
    }

    /// Start swinging open from the current progress.
    pub fn open<T>(&mut self, runner: &mut TweenRunner<T>) {
        self.start(Swing::Open, self.open_duration, runner);
    }

    /// Start swinging closed from the current progress.
    pub fn close<T>(&mut self, runner: &mut TweenRunner<T>) {
        self.start(Swing::Close, self.close_duration, runner);
    }

    fn start<T>(
        &mut self,
        swing: Swing,
        duration: Duration,
        runner: &mut TweenRunner<T>,
    ) {
        self.stop(runner);
        let tween =
            Tween::new(self.progress, swing.target(), duration, self.easing);
        self.active = Some((swing, runner.add(tween)));
    }

    /// Halt the swing in flight, leaving progress where it is.
    pub fn stop<T>(&mut self, runner: &mut TweenRunner<T>) {
        if let Some((_, id)) = self.active.take() {
            let _ = runner.cancel(id);
        }
    }

    /// Halt any swing and snap back to closed.
    pub fn reset<T>(&mut self, runner: &mut TweenRunner<T>) {
        self.stop(runner);
        self.progress = 0.0;
    }

    /// Fold a runner event into the door state.
    ///
    /// Returns `None` for events that belong to other tweens or tasks.
    pub fn apply<T>(&mut self, event: &TickEvent<T>) -> Option<DoorEvent> {
        let (swing, active_id) = self.active?;
        match *event {
            TickEvent::Updated { id, value } if id == active_id => {
                self.progress = value;
                Some(DoorEvent::Moved(value))
            }
            TickEvent::Completed { id, value } if id == active_id => {
                self.progress = value;
                self.active = None;
                Some(DoorEvent::Settled {
                    swing,
                    progress: value,
                })
            }
            _ => None,
        }
    }
}

/// Rotation factors of a hinge pair driven by one progress value.
#[inline]
#[must_use]
pub fn hinge_pair(progress: f32) -> [f32; 2] {
    [progress, -progress]
}
