//! The boundary between coordinator decisions and the renderer/UI.

use serde::Serialize;

/// Receives presentation decisions from the coordinator.
///
/// Implementors forward them to a scene graph (door group visibility,
/// hinge transforms) and a UI layer (trigger button).
pub trait PresentationSink {
    /// Show or hide the door group.
    fn set_doors_visible(&mut self, visible: bool);
    /// Enable or disable the trigger control.
    fn set_trigger_enabled(&mut self, enabled: bool);
    /// Door progress for this frame (0 = closed, 1 = open).
    fn set_door_progress(&mut self, progress: f32);
}

impl<S: PresentationSink + ?Sized> PresentationSink for &mut S {
    fn set_doors_visible(&mut self, visible: bool) {
        (**self).set_doors_visible(visible);
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        (**self).set_trigger_enabled(enabled);
    }

    fn set_door_progress(&mut self, progress: f32) {
        (**self).set_door_progress(progress);
    }
}

/// Latest presentation state, as a renderer would read it each frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Presentation {
    /// Door group visibility.
    pub doors_visible: bool,
    /// Trigger control availability.
    pub trigger_enabled: bool,
    /// Door progress.
    pub door_progress: f32,
}

impl PresentationSink for Presentation {
    fn set_doors_visible(&mut self, visible: bool) {
        self.doors_visible = visible;
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger_enabled = enabled;
    }

    fn set_door_progress(&mut self, progress: f32) {
        self.door_progress = progress;
    }
}

/// One presentation call, for recording sinks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationChange {
    /// [`PresentationSink::set_doors_visible`].
    DoorsVisible(bool),
    /// [`PresentationSink::set_trigger_enabled`].
    TriggerEnabled(bool),
    /// [`PresentationSink::set_door_progress`].
    DoorProgress(f32),
}

/// Records every call in order.
impl PresentationSink for Vec<PresentationChange> {
    fn set_doors_visible(&mut self, visible: bool) {
        self.push(PresentationChange::DoorsVisible(visible));
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.push(PresentationChange::TriggerEnabled(enabled));
    }

    fn set_door_progress(&mut self, progress: f32) {
        self.push(PresentationChange::DoorProgress(progress));
    }
}
