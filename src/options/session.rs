use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What happens to an in-flight door cycle when the target is lost.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LostTargetPolicy {
    /// Hide the doors but let the cycle finish in the background.
    #[default]
    Continue,
    /// Abort the cycle: progress snaps to closed and the state returns
    /// to idle.
    Reset,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Session", inline)]
#[serde(default)]
/// Session-level behaviour.
pub struct SessionOptions {
    /// Handling of target loss during a door cycle.
    #[schemars(title = "On Target Lost")]
    pub lost_target: LostTargetPolicy,
    /// Frame rate cap (0 = unlimited); also the scenario replay rate.
    #[schemars(title = "Target FPS", range(min = 0, max = 240))]
    pub target_fps: u32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            lost_target: LostTargetPolicy::Continue,
            target_fps: 60,
        }
    }
}
