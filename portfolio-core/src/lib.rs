//! Interaction core for the portfolio app.
//!
//! Everything here is DOM-free and natively testable: the landing-view
//! sequencer, the route model, and the small per-entity state machines the
//! views drive. The UI crate interprets the effect values these modules emit;
//! nothing in this crate touches timers or navigation directly.

pub mod hero;
pub mod image;
pub mod particles;
pub mod route;
pub mod typewriter;

pub use hero::{HeroEffect, HeroEvent, HeroPhase, HeroSequencer, HeroTimeline};
pub use image::ImageFallback;
pub use route::{Route, TransitionGroup};
