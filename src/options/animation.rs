use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Timing and easing of the door open/hold/close cycle.
pub struct AnimationOptions {
    /// Duration of the open swing in milliseconds.
    #[schemars(title = "Open Duration (ms)", range(min = 0, max = 10000), extend("step" = 100))]
    pub open_duration_ms: u64,
    /// Duration of the close swing in milliseconds.
    #[schemars(title = "Close Duration (ms)", range(min = 0, max = 10000), extend("step" = 100))]
    pub close_duration_ms: u64,
    /// How long the doors stay fully open before closing, in milliseconds.
    #[schemars(title = "Hold (ms)", range(min = 0, max = 30000), extend("step" = 250))]
    pub hold_ms: u64,
    /// Easing curve shared by both swings.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl AnimationOptions {
    /// Open swing duration.
    #[must_use]
    pub fn open_duration(&self) -> Duration {
        Duration::from_millis(self.open_duration_ms)
    }

    /// Close swing duration.
    #[must_use]
    pub fn close_duration(&self) -> Duration {
        Duration::from_millis(self.close_duration_ms)
    }

    /// Hold delay between the end of the open swing and the close swing.
    #[must_use]
    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }

    /// Length of one full open → hold → close cycle.
    #[must_use]
    pub fn cycle(&self) -> Duration {
        self.open_duration() + self.hold() + self.close_duration()
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            open_duration_ms: 2000,
            close_duration_ms: 2000,
            hold_ms: 4000,
            easing: EasingFunction::BounceOut,
        }
    }
}
