use serde::{Deserialize, Serialize};

use super::event::SessionEvent;

/// Actions that can be bound to keyboard keys.
///
/// Used as keys in [`KeybindingOptions`](crate::options::KeybindingOptions)
/// to map each action to a physical key string:
///
/// ```toml
/// [keybindings.bindings]
/// trigger = "Space"
/// reset_session = "Escape"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Activate the door trigger.
    Trigger,
    /// Abort the running door cycle.
    ResetSession,
}

impl KeyAction {
    /// The session event this action produces.
    #[must_use]
    pub fn to_event(self) -> SessionEvent {
        match self {
            Self::Trigger => SessionEvent::Trigger,
            Self::ResetSession => SessionEvent::Reset,
        }
    }
}
