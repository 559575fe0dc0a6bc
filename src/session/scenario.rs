//! Scripted sessions replayed at a fixed frame rate.
//!
//! A scenario is a list of timed [`SessionEvent`]s. Replaying it feeds each
//! event into the session at the first frame starting at or after its
//! timestamp and records every change of coordinator-visible state.
//!
//! ```toml
//! name = "walk away mid-swing"
//! duration_ms = 9000
//!
//! [[events]]
//! at_ms = 0
//! event = "target_visible"
//!
//! [[events]]
//! at_ms = 500
//! event = "trigger"
//!
//! [[events]]
//! at_ms = 1200
//! event = "target_lost"
//! ```

use std::path::Path;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{Session, SessionSnapshot};
use crate::coordinator::{AnimationState, PresentationSink, TrackingState};
use crate::error::PorticoError;
use crate::input::SessionEvent;
use crate::util::frame_timing::frame_interval;

/// Longest script [`Scenario::flicker`] generates, in milliseconds.
pub const MAX_FLICKER_DURATION_MS: u64 = 60 * 60 * 1000;

/// One event at a point in scenario time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    /// Scenario time in milliseconds.
    pub at_ms: u64,
    /// The event delivered.
    pub event: SessionEvent,
}

/// A timed event script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Label used in logs and reports.
    pub name: String,
    /// How long to run, in milliseconds.
    pub duration_ms: u64,
    /// Events in any order; replay sorts them by time, keeping file order
    /// for ties.
    pub events: Vec<ScriptedEvent>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            name: "unnamed".to_owned(),
            duration_ms: 10_000,
            events: Vec::new(),
        }
    }
}

/// A change of coordinator-visible state during a replay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitionRecord {
    /// Scenario time at the start of the frame, in milliseconds.
    pub at_ms: u64,
    /// State after the frame.
    pub state: SessionSnapshot,
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    /// Scenario name.
    pub name: String,
    /// Frames run.
    pub frames: u64,
    /// Every frame after which tracking, cycle, visibility or trigger
    /// state differed from the frame before.
    pub transitions: Vec<TransitionRecord>,
    /// State after the last frame.
    pub last: SessionSnapshot,
}

impl ScenarioReport {
    /// Cycle states in the order they were entered.
    #[must_use]
    pub fn animation_states(&self) -> Vec<AnimationState> {
        let mut states: Vec<AnimationState> = Vec::new();
        for record in &self.transitions {
            if states.last() != Some(&record.state.animation) {
                states.push(record.state.animation);
            }
        }
        states
    }

    /// Number of completed open → close cycles.
    #[must_use]
    pub fn completed_cycles(&self) -> usize {
        self.animation_states()
            .windows(2)
            .filter(|w| {
                w[0] == AnimationState::Closing && w[1] == AnimationState::Idle
            })
            .count()
    }
}

impl Scenario {
    /// Parse a scenario from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, PorticoError> {
        toml::from_str(content)
            .map_err(|e| PorticoError::ScenarioParse(e.to_string()))
    }

    /// Load a scenario from a TOML file.
    pub fn load(path: &Path) -> Result<Self, PorticoError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String, PorticoError> {
        toml::to_string_pretty(self)
            .map_err(|e| PorticoError::ScenarioParse(e.to_string()))
    }

    /// The target comes into view, the user triggers once, and the cycle
    /// runs to completion with the target in view.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            name: "reference".to_owned(),
            duration_ms: 11_000,
            events: vec![
                ScriptedEvent {
                    at_ms: 500,
                    event: SessionEvent::TargetVisible,
                },
                ScriptedEvent {
                    at_ms: 1500,
                    event: SessionEvent::Trigger,
                },
            ],
        }
    }

    /// Seeded random script: the target flickers in and out of view and
    /// the user presses the trigger at random, often when it is ignored.
    ///
    /// `duration_ms` is capped at [`MAX_FLICKER_DURATION_MS`].
    #[must_use]
    pub fn flicker(seed: u64, duration_ms: u64) -> Self {
        let duration_ms = duration_ms.min(MAX_FLICKER_DURATION_MS);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut events = Vec::new();
        let mut at_ms = 0;
        let mut seen = false;
        while at_ms < duration_ms {
            at_ms = at_ms.saturating_add(rng.random_range(50..1500));
            let event = if rng.random_bool(0.4) {
                SessionEvent::Trigger
            } else if seen {
                SessionEvent::TargetLost
            } else {
                SessionEvent::TargetVisible
            };
            if event != SessionEvent::Trigger {
                seen = !seen;
            }
            events.push(ScriptedEvent { at_ms, event });
        }
        Self {
            name: format!("flicker-{seed}"),
            duration_ms,
            events,
        }
    }

    /// Replay into `session` at its configured frame rate.
    pub fn replay<S: PresentationSink>(
        &self,
        session: &mut Session<S>,
    ) -> ScenarioReport {
        let step = frame_interval(session.options().session.target_fps.max(1));
        self.replay_with_step(session, step)
    }

    /// Replay into `session` with a fixed frame step.
    ///
    /// A zero step is treated as one millisecond.
    pub fn replay_with_step<S: PresentationSink>(
        &self,
        session: &mut Session<S>,
        step: Duration,
    ) -> ScenarioReport {
        let step = step.max(Duration::from_millis(1));
        let end = Duration::from_millis(self.duration_ms);

        let mut events = self.events.clone();
        events.sort_by_key(|e| e.at_ms);
        let mut pending = events.into_iter().peekable();

        let mut now = Duration::ZERO;
        let mut frames = 0;
        let mut transitions = Vec::new();
        let mut previous = session.snapshot();

        while now < end {
            while let Some(scripted) =
                pending.next_if(|e| Duration::from_millis(e.at_ms) <= now)
            {
                session.push_event(scripted.event);
            }
            session.frame(step);
            frames += 1;

            let state = session.snapshot();
            if changed(&previous, &state) {
                transitions.push(TransitionRecord {
                    at_ms: now.as_millis() as u64,
                    state,
                });
            }
            previous = state;
            now += step;
        }

        if pending.peek().is_some() {
            log::warn!(
                "scenario '{}': events after {} ms were never delivered",
                self.name,
                self.duration_ms
            );
        }
        log::info!(
            "scenario '{}' finished: {frames} frames, {} transitions",
            self.name,
            transitions.len()
        );

        ScenarioReport {
            name: self.name.clone(),
            frames,
            transitions,
            last: previous,
        }
    }
}

fn changed(a: &SessionSnapshot, b: &SessionSnapshot) -> bool {
    a.tracking != b.tracking
        || a.animation != b.animation
        || a.doors_visible != b.doors_visible
        || a.trigger_enabled != b.trigger_enabled
}

/// Whether every recorded transition shows doors exactly when the target
/// is seen.
#[must_use]
pub fn visibility_follows_tracking(report: &ScenarioReport) -> bool {
    report
        .transitions
        .iter()
        .all(|r| r.state.doors_visible == (r.state.tracking == TrackingState::Seen))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{LostTargetPolicy, Options};

    const STEP: Duration = Duration::from_millis(10);

    #[test]
    fn reference_scenario_runs_one_full_cycle() {
        let mut session = Session::with_options(Options::default());
        let report = Scenario::reference().replay_with_step(&mut session, STEP);

        assert_eq!(report.frames, 1100);
        assert_eq!(
            report.animation_states(),
            vec![
                AnimationState::Idle,
                AnimationState::Opening,
                AnimationState::HoldOpen,
                AnimationState::Closing,
                AnimationState::Idle,
            ]
        );
        assert_eq!(report.completed_cycles(), 1);
        assert_eq!(report.last.animation, AnimationState::Idle);
        assert_eq!(report.last.door_progress, 0.0);
        assert!(report.last.trigger_enabled);

        let opening = report
            .transitions
            .iter()
            .find(|r| r.state.animation == AnimationState::Opening)
            .unwrap();
        assert_eq!(opening.at_ms, 1500);
        let hold = report
            .transitions
            .iter()
            .find(|r| r.state.animation == AnimationState::HoldOpen)
            .unwrap();
        // Trigger frame starts at 1500 and advances 10 ms; 200 frames open
        assert_eq!(hold.at_ms, 3490);
    }

    #[test]
    fn default_replay_uses_target_fps() {
        let mut options = Options::default();
        options.session.target_fps = 50;
        let mut session = Session::with_options(options);
        let scenario = Scenario {
            duration_ms: 1000,
            ..Scenario::default()
        };
        let report = scenario.replay(&mut session);
        assert_eq!(report.frames, 50);
        assert_eq!(session.elapsed(), Duration::from_secs(1));
    }

    #[test]
    fn parses_toml_scenarios() {
        let toml_str = r#"
name = "walk away mid-swing"
duration_ms = 9000

[[events]]
at_ms = 1200
event = "target_lost"

[[events]]
at_ms = 0
event = "target_visible"

[[events]]
at_ms = 500
event = "trigger"
"#;
        let scenario = Scenario::from_toml_str(toml_str).unwrap();
        assert_eq!(scenario.events.len(), 3);
        assert_eq!(scenario.events[2].event, SessionEvent::Trigger);

        let mut session = Session::with_options(Options::default());
        let report = scenario.replay_with_step(&mut session, STEP);
        assert!(visibility_follows_tracking(&report));
        // The cycle finished out of view
        assert_eq!(report.completed_cycles(), 1);
        assert!(!report.last.doors_visible);
        assert!(!report.last.trigger_enabled);
    }

    #[test]
    fn bad_scenario_is_a_scenario_error() {
        let err = Scenario::from_toml_str("[[events]]\nat_ms = 1\nevent = \"jump\"")
            .unwrap_err();
        assert!(matches!(err, PorticoError::ScenarioParse(_)));
    }

    #[test]
    fn toml_round_trip() {
        let scenario = Scenario::flicker(3, 5000);
        let parsed =
            Scenario::from_toml_str(&scenario.to_toml_string().unwrap())
                .unwrap();
        assert_eq!(parsed, scenario);
    }

    #[test]
    fn flicker_is_deterministic_per_seed() {
        assert_eq!(Scenario::flicker(42, 20_000), Scenario::flicker(42, 20_000));
        assert_ne!(Scenario::flicker(1, 20_000), Scenario::flicker(2, 20_000));
    }

    #[test]
    fn flicker_duration_is_capped() {
        let scenario = Scenario::flicker(5, u64::MAX);
        assert_eq!(scenario.duration_ms, MAX_FLICKER_DURATION_MS);
        let last = scenario.events.last().unwrap();
        assert!(last.at_ms >= MAX_FLICKER_DURATION_MS);
        assert!(last.at_ms < MAX_FLICKER_DURATION_MS + 1500);
        assert!(scenario
            .events
            .windows(2)
            .all(|w| w[0].at_ms < w[1].at_ms));
    }

    #[test]
    fn flicker_replays_keep_visibility_consistent() {
        for seed in 0..10 {
            for policy in [LostTargetPolicy::Continue, LostTargetPolicy::Reset] {
                let mut options = Options::default();
                options.session.lost_target = policy;
                let mut session = Session::with_options(options);
                let report = Scenario::flicker(seed, 30_000)
                    .replay_with_step(&mut session, Duration::from_millis(20));
                assert!(visibility_follows_tracking(&report), "seed {seed}");
                if policy == LostTargetPolicy::Reset {
                    for record in &report.transitions {
                        if record.state.tracking == TrackingState::Unseen {
                            assert_eq!(record.state.door_progress, 0.0);
                        }
                    }
                }
                let presented = session.presentation();
                assert_eq!(presented.doors_visible, report.last.doors_visible);
                assert_eq!(
                    presented.trigger_enabled,
                    report.last.trigger_enabled
                );
                assert_eq!(presented.door_progress, report.last.door_progress);
            }
        }
    }
}
