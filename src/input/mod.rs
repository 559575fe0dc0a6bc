//! Input vocabulary: session events, the tracking observer seam, and key
//! actions.

/// Session events, the event queue, and the tracking observer trait.
pub mod event;
/// Bindable keyboard actions.
pub mod keyboard;

pub use event::{EventQueue, SessionEvent, TrackingObserver};
pub use keyboard::KeyAction;
