//! Animation system: tweens, the per-frame tween runner, and the door
//! swing built on them.

pub mod door;
pub mod runner;
pub mod tween;

pub use door::{hinge_pair, DoorAnimation, DoorEvent, Swing};
pub use runner::{TaskId, TickEvent, TweenId, TweenRunner};
pub use tween::{Tween, TweenStep};
