//! Scene-side helpers for hosts that render the door group.

pub mod hinge;

pub use hinge::{DoorInstance, HingePair};
