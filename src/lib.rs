// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Visibility-gated door animation for image-tracked AR scenes.
//!
//! Portico decides, from a stream of target-visible / target-lost events
//! and a user trigger, when a one-shot "opening doors" animation may run,
//! and keeps the presentation (door visibility, trigger availability,
//! hinge progress) consistent with both the tracking state and the
//! animation state. Rendering and image tracking are external; they talk
//! to the crate through [`coordinator::PresentationSink`] and
//! [`input::SessionEvent`].
//!
//! # Key entry points
//!
//! - [`session::Session`] - one AR session: event queue, coordinator and
//!   options, driven once per frame
//! - [`coordinator::VisibilityCoordinator`] - the visibility/animation
//!   state machine
//! - [`animation`] - tweens, the per-frame tween runner and the door swing
//! - [`scene::HingePair`] - hinge transforms derived from door progress
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Frame model
//!
//! Everything is single-threaded and frame-driven. Within one frame the
//! session drains pending tracking/trigger events, then advances the tween
//! runner (which also fires deferred tasks such as the hold → close step),
//! then the host renders from the presentation state.

pub mod animation;
pub mod coordinator;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod session;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use error::PorticoError;
