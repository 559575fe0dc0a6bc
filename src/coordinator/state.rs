use serde::Serialize;

/// Whether the tracking source currently sees the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingState {
    /// Target not in view (session start state).
    #[default]
    Unseen,
    /// Target in view.
    Seen,
}

impl TrackingState {
    /// Whether the target is in view.
    #[must_use]
    pub fn is_seen(self) -> bool {
        self == Self::Seen
    }
}

/// Phase of the door cycle.
///
/// Transitions only run forward around the loop
/// `Idle → Opening → HoldOpen → Closing → Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationState {
    /// Doors closed, nothing scheduled.
    #[default]
    Idle,
    /// Open swing in flight.
    Opening,
    /// Fully open, waiting for the hold delay.
    HoldOpen,
    /// Close swing in flight.
    Closing,
}

impl AnimationState {
    /// Whether no cycle is running.
    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }

    /// The state the cycle moves to next.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Idle => Self::Opening,
            Self::Opening => Self::HoldOpen,
            Self::HoldOpen => Self::Closing,
            Self::Closing => Self::Idle,
        }
    }
}
