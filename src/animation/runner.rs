//! Tween runner: the single per-frame scheduling point for animation.
//!
//! The runner owns every active [`Tween`] plus a queue of deferred tasks.
//! One call to [`TweenRunner::advance`] per rendered frame moves all tweens
//! forward in registration order and then fires every task whose deadline
//! has passed. Nothing else moves animation time.

use std::time::Duration;

use super::tween::{Tween, TweenStep};

/// Handle to a tween registered with a [`TweenRunner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(u64);

/// Handle to a deferred task queued on a [`TweenRunner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// Something that happened during one [`TweenRunner::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickEvent<T> {
    /// A tween moved but has not finished.
    Updated {
        /// Tween that moved.
        id: TweenId,
        /// Its eased value after this frame.
        value: f32,
    },
    /// A tween reached its end value and was removed.
    Completed {
        /// Tween that finished.
        id: TweenId,
        /// Its final value (exactly the tween's end value).
        value: f32,
    },
    /// A deferred task came due and was removed.
    Fired {
        /// Task that fired.
        id: TaskId,
        /// Payload given at scheduling time.
        task: T,
    },
}

#[derive(Debug, Clone)]
struct ScheduledTask<T> {
    id: TaskId,
    due: Duration,
    task: T,
}

/// Advances registered tweens and deferred tasks once per frame.
///
/// `T` is the payload carried by deferred tasks; the runner never
/// interprets it.
#[derive(Debug, Clone)]
pub struct TweenRunner<T> {
    /// Active tweens in registration order.
    tweens: Vec<(TweenId, Tween)>,
    /// Pending deferred tasks (unordered; sorted on fire).
    tasks: Vec<ScheduledTask<T>>,
    /// Total time advanced so far.
    now: Duration,
    next_id: u64,
}

impl<T> TweenRunner<T> {
    /// Empty runner at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tweens: Vec::new(),
            tasks: Vec::new(),
            now: Duration::ZERO,
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Register a tween. It is first advanced on the next call to
    /// [`advance`](Self::advance).
    pub fn add(&mut self, tween: Tween) -> TweenId {
        let id = TweenId(self.next_id());
        self.tweens.push((id, tween));
        id
    }

    /// Queue `task` to fire once `delay` of frame time has elapsed.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TaskId {
        let id = TaskId(self.next_id());
        self.tasks.push(ScheduledTask {
            id,
            due: self.now.saturating_add(delay),
            task,
        });
        id
    }

    /// Remove a tween without completing it. Returns whether it was active.
    pub fn cancel(&mut self, id: TweenId) -> bool {
        let before = self.tweens.len();
        self.tweens.retain(|(tid, _)| *tid != id);
        self.tweens.len() != before
    }

    /// Drop a pending task. Returns whether it was still pending.
    pub fn cancel_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Look up an active tween.
    #[must_use]
    pub fn tween(&self, id: TweenId) -> Option<&Tween> {
        self.tweens
            .iter()
            .find(|(tid, _)| *tid == id)
            .map(|(_, tween)| tween)
    }

    /// Number of tweens still running.
    #[must_use]
    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    /// Number of tasks still waiting to fire.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Whether nothing is running or pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty() && self.tasks.is_empty()
    }

    /// Total frame time advanced since creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.now
    }

    /// Advance by one frame of `dt`.
    ///
    /// Tween events come first, in registration order; then due tasks, in
    /// deadline order (ties broken by scheduling order). Finished tweens
    /// and fired tasks are removed before this returns.
    pub fn advance(&mut self, dt: Duration) -> Vec<TickEvent<T>> {
        self.now = self.now.saturating_add(dt);

        let mut events = Vec::with_capacity(self.tweens.len());
        for (id, tween) in &mut self.tweens {
            events.push(match tween.advance(dt) {
                TweenStep::Running(value) => {
                    TickEvent::Updated { id: *id, value }
                }
                TweenStep::Finished(value) => {
                    TickEvent::Completed { id: *id, value }
                }
            });
        }
        self.tweens.retain(|(_, tween)| !tween.is_finished());

        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.tasks)
                .into_iter()
                .partition(|t| t.due <= now);
        self.tasks = pending;
        due.sort_by_key(|t| (t.due, t.id));
        events.extend(
            due.into_iter()
                .map(|t| TickEvent::Fired { id: t.id, task: t.task }),
        );

        events
    }
}

impl<T> Default for TweenRunner<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::easing::EasingFunction;

    fn linear(from: f32, to: f32, ms: u64) -> Tween {
        Tween::new(
            from,
            to,
            Duration::from_millis(ms),
            EasingFunction::Linear,
        )
    }

    #[test]
    fn test_advance_in_registration_order() {
        let mut runner: TweenRunner<()> = TweenRunner::new();
        let a = runner.add(linear(0.0, 1.0, 100));
        let b = runner.add(linear(1.0, 0.0, 100));

        let events = runner.advance(Duration::from_millis(50));
        assert_eq!(
            events,
            vec![
                TickEvent::Updated { id: a, value: 0.5 },
                TickEvent::Updated { id: b, value: 0.5 },
            ]
        );
    }

    #[test]
    fn test_completed_tweens_are_removed() {
        let mut runner: TweenRunner<()> = TweenRunner::new();
        let a = runner.add(linear(0.0, 1.0, 100));
        let events = runner.advance(Duration::from_millis(150));
        assert_eq!(events, vec![TickEvent::Completed { id: a, value: 1.0 }]);
        assert_eq!(runner.active_tweens(), 0);
        assert!(runner.advance(Duration::from_millis(10)).is_empty());
    }

    #[test]
    fn test_task_fires_after_delay() {
        let mut runner = TweenRunner::new();
        let id = runner.schedule(Duration::from_millis(100), "close");

        assert!(runner.advance(Duration::from_millis(60)).is_empty());
        let events = runner.advance(Duration::from_millis(40));
        assert_eq!(events, vec![TickEvent::Fired { id, task: "close" }]);
        assert_eq!(runner.pending_tasks(), 0);
    }

    #[test]
    fn test_tasks_fire_in_deadline_order() {
        let mut runner = TweenRunner::new();
        let late = runner.schedule(Duration::from_millis(30), 2);
        let early = runner.schedule(Duration::from_millis(10), 1);
        let events = runner.advance(Duration::from_millis(50));
        assert_eq!(
            events,
            vec![
                TickEvent::Fired { id: early, task: 1 },
                TickEvent::Fired { id: late, task: 2 },
            ]
        );
    }

    #[test]
    fn test_tweens_report_before_tasks() {
        let mut runner = TweenRunner::new();
        let task = runner.schedule(Duration::ZERO, 'x');
        let tween = runner.add(linear(0.0, 1.0, 100));
        let events = runner.advance(Duration::from_millis(10));
        assert!(matches!(events[0], TickEvent::Updated { id, .. } if id == tween));
        assert_eq!(events[1], TickEvent::Fired { id: task, task: 'x' });
    }

    #[test]
    fn test_cancel() {
        let mut runner = TweenRunner::new();
        let tween = runner.add(linear(0.0, 1.0, 100));
        let task = runner.schedule(Duration::from_millis(10), ());
        assert!(runner.cancel(tween));
        assert!(!runner.cancel(tween));
        assert!(runner.cancel_task(task));
        assert!(runner.is_idle());
        assert!(runner.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_schedule_is_relative_to_elapsed_time() {
        let mut runner = TweenRunner::new();
        let _ = runner.advance(Duration::from_millis(500));
        let id = runner.schedule(Duration::from_millis(100), ());
        assert!(runner.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(
            runner.advance(Duration::from_millis(1)),
            vec![TickEvent::Fired { id, task: () }]
        );
        assert_eq!(runner.elapsed(), Duration::from_millis(600));
    }
}
