//! Stagger Animation Timing
//!
//! Delay bookkeeping for staggered entrance animations, where each glyph of a
//! title starts its animation a fixed step after the previous one.
//!
//! # Features
//!
//! - **Timing**: `initial + index * step` delays, computed from the index so
//!   long runs never drift
//! - **Clock**: a per-element counter handing out the next delay
//! - **Delay values**: render as CSS time values (`0.05s`)

pub mod clock;
pub mod delay;
pub mod timing;

pub use clock::StaggerClock;
pub use delay::Delay;
pub use timing::StaggerTiming;
